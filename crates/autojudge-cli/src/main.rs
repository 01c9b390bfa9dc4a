use clap::Parser;

mod console;
pub mod exit_codes;

use autojudge_core::config::EvalConfig;
use autojudge_core::judge::judge_for;
use autojudge_core::pipeline::Pipeline;
use autojudge_core::report::Reporter;
use autojudge_core::{dataset, Error};

#[derive(Parser)]
#[command(
    name = "autojudge",
    version,
    about = "Batch LLM-judge evaluation — grade question/answer pairs against capability rubrics"
)]
struct Cli {
    /// Path to the run configuration (YAML).
    #[arg(long, default_value = "config.yaml")]
    config: std::path::PathBuf,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("fatal: {e}");
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}

fn exit_code_for(err: &Error) -> i32 {
    match err {
        Error::Write(_) => exit_codes::WRITE_ERROR,
        _ => exit_codes::CONFIG_ERROR,
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = EvalConfig::from_file(&cli.config)?;
    let records = dataset::load_records(&config)?;
    let judge = judge_for(&config)?;

    println!("Model selected: {}", config.judge_model);
    println!("Records to process: {}", records.len());

    let mut pipeline = Pipeline::new(judge, &config.language);
    if let Some(sink) = console::progress_sink(records.len()) {
        pipeline = pipeline.with_progress(sink);
    }
    let results = pipeline.run(records).await;

    let reporter = Reporter::new(&config.output_file);
    reporter.save(&results)?;

    println!("Evaluation complete.");
    println!("  JSON: {}", config.output_file.display());
    println!("  CSV:  {}", reporter.csv_path().display());
    Ok(())
}
