//! Grading prompt assembly.
//!
//! A master instruction block embeds the record and mandates a strict
//! JSON-only reply; the capability rubric is appended last so it sits
//! closest to the generation point.

/// Criteria used when no capability-specific rubric matches. Rubric
/// lookup is total: unknown capabilities silently resolve here.
const DEFAULT_RUBRIC: &str = "\
Criteria:
- Relevance: Does the answer directly address the question?
- Accuracy: Is the information factually correct?
- Clarity: Is the language clear and easy to understand?";

const MATH_RUBRIC: &str = "\
Criteria:
- Logic: Are the mathematical steps logically sound?
- Calculation: Are the final values correct?
- Format: Is the solution presented clearly?
- If the reasoning is correct but the final number is wrong, give a maximum score of 3.";

const SUMMARIZATION_RUBRIC: &str = "\
Criteria:
- Coverage: Does the summary include all key points from the source?
- Conciseness: Is the summary free of unnecessary details?
- Hallucination: Does the summary contain information NOT present in the source? (If yes, Score = 1).";

const TRANSLATION_RUBRIC: &str = "\
Criteria:
- Fidelity: Is the meaning preserved accurately?
- Fluency: Does the translated text sound natural in the target language?
- Grammar: Are there any syntax or morphology errors?";

/// Case-insensitive rubric lookup with a silent default fallback.
pub fn rubric_for(capability: &str) -> &'static str {
    match capability.trim().to_lowercase().as_str() {
        "math" => MATH_RUBRIC,
        "summarization" => SUMMARIZATION_RUBRIC,
        "translation" => TRANSLATION_RUBRIC,
        _ => DEFAULT_RUBRIC,
    }
}

/// Render the full instruction string for one record. Pure and
/// deterministic; absent or empty ground truth renders as the literal
/// `N/A`.
pub fn build_prompt(
    capability: &str,
    question: &str,
    answer: &str,
    ground_truth: Option<&str>,
    language: &str,
) -> String {
    let ground_truth = match ground_truth {
        Some(text) if !text.trim().is_empty() => text,
        _ => "N/A",
    };
    format!(
        "You are an impartial expert AI judge evaluating a response in {language}.\n\
         Your task is to evaluate the 'Model Answer' based on the provided 'Question' and 'Rubric'.\n\
         \n\
         Input Data:\n\
         - Question: {question}\n\
         - Model Answer: {answer}\n\
         - Ground Truth (Optional): {ground_truth}\n\
         \n\
         Evaluation Steps:\n\
         1. Analyze the Question and the Model Answer carefully.\n\
         2. Compare the Model Answer against the Rubric and Ground Truth (if available).\n\
         3. Think step-by-step about the quality (Accuracy, Relevance, Style).\n\
         4. Assign a score from 1 to 5.\n\
         5. Output ONLY a valid JSON object in the following format:\n\
         \n\
         {{\n\
         \x20   \"reasoning\": \"Your step-by-step explanation here...\",\n\
         \x20   \"score\": <integer_1_to_5>\n\
         }}\n\
         \n\
         SPECIFIC RUBRIC TO USE:\n\
         {rubric}",
        rubric = rubric_for(capability),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_lookup_is_case_insensitive() {
        assert_eq!(rubric_for("Math"), rubric_for("math"));
        assert_eq!(rubric_for("TRANSLATION"), rubric_for("translation"));
    }

    #[test]
    fn unknown_capability_falls_back_to_default() {
        assert_eq!(rubric_for("arabic_grammar"), rubric_for("default"));
        assert_eq!(rubric_for(""), rubric_for("default"));
        let math = build_prompt("Math", "q", "a", None, "Arabic");
        let unknown = build_prompt("no_such_rubric", "q", "a", None, "Arabic");
        assert_ne!(math, unknown);
        assert!(unknown.contains("Relevance"));
    }

    #[test]
    fn null_ground_truth_renders_as_na() {
        let prompt = build_prompt("math", "q", "a", None, "Arabic");
        assert!(prompt.contains("Ground Truth (Optional): N/A"));
        assert!(!prompt.to_lowercase().contains("none"));
        assert!(!prompt.to_lowercase().contains("null"));
    }

    #[test]
    fn empty_ground_truth_also_renders_as_na() {
        let prompt = build_prompt("math", "q", "a", Some("  "), "Arabic");
        assert!(prompt.contains("Ground Truth (Optional): N/A"));
    }

    #[test]
    fn prompt_embeds_record_and_mandates_json() {
        let prompt = build_prompt(
            "summarization",
            "What happened?",
            "A thing happened.",
            Some("The thing."),
            "English",
        );
        assert!(prompt.contains("evaluating a response in English"));
        assert!(prompt.contains("- Question: What happened?"));
        assert!(prompt.contains("- Model Answer: A thing happened."));
        assert!(prompt.contains("- Ground Truth (Optional): The thing."));
        assert!(prompt.contains("\"score\": <integer_1_to_5>"));
    }

    #[test]
    fn rubric_is_appended_last() {
        let prompt = build_prompt("translation", "q", "a", None, "Arabic");
        assert!(prompt.ends_with(rubric_for("translation")));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let one = build_prompt("math", "q", "a", Some("gt"), "Arabic");
        let two = build_prompt("math", "q", "a", Some("gt"), "Arabic");
        assert_eq!(one, two);
    }
}
