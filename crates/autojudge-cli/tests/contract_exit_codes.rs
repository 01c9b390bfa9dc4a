//! Startup-fatal failures must abort with a clear message and a
//! non-zero exit code before any judging happens.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn autojudge() -> Command {
    Command::cargo_bin("autojudge").unwrap()
}

#[test]
fn missing_config_exits_with_config_error() {
    autojudge()
        .arg("--config")
        .arg("definitely/missing.yaml")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn missing_input_table_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    std::fs::write(
        &config,
        "input_file: no/such/input.csv\noutput_file: out/report.json\ncolumns:\n  question_col: q\n  answer_col: a\n  capability_col: c\n",
    )
    .unwrap();

    autojudge()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn missing_columns_are_named_before_any_network_call() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "Question,Capability").unwrap();
    writeln!(file, "q,math").unwrap();

    let config = dir.path().join("config.yaml");
    std::fs::write(
        &config,
        format!(
            "input_file: {}\noutput_file: out/report.json\ncolumns:\n  question_col: Question\n  answer_col: Answer\n  capability_col: Capability\n",
            input.display()
        ),
    )
    .unwrap();

    autojudge()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Answer"));
}

#[test]
fn unknown_provider_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "Question,Answer,Capability\nq,a,math\n").unwrap();

    let config = dir.path().join("config.yaml");
    std::fs::write(
        &config,
        format!(
            "input_file: {}\noutput_file: out/report.json\njudge_provider: llama\ncolumns:\n  question_col: Question\n  answer_col: Answer\n  capability_col: Capability\n",
            input.display()
        ),
    )
    .unwrap();

    autojudge()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown judge provider"));
}

#[test]
fn missing_credential_is_fatal_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "Question,Answer,Capability\nq,a,math\n").unwrap();

    let config = dir.path().join("config.yaml");
    std::fs::write(
        &config,
        format!(
            "input_file: {}\noutput_file: out/report.json\ncolumns:\n  question_col: Question\n  answer_col: Answer\n  capability_col: Capability\n",
            input.display()
        ),
    )
    .unwrap();

    autojudge()
        .arg("--config")
        .arg(&config)
        .env_remove("GEMINI_API_KEY")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}
