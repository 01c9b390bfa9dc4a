//! Judge backends: polymorphic `evaluate(prompt)` over hosted
//! providers, selected by a factory keyed on the configuration.

pub mod gemini;

use crate::config::EvalConfig;
use crate::errors::Error;
use crate::model::Evaluation;
use async_trait::async_trait;

#[async_trait]
pub trait Judge: Send + Sync + std::fmt::Debug {
    /// Grade one rendered prompt.
    ///
    /// Never errors: a backend or parse failure comes back as a
    /// degraded [`Evaluation`] (score 0) so one bad record can never
    /// abort the batch.
    async fn evaluate(&self, prompt: &str) -> Evaluation;

    fn provider_name(&self) -> &'static str;
}

/// Backend selection. `"google"` is the only implemented provider;
/// `"openai"` is declared but unimplemented. Matching is
/// case-insensitive.
pub fn judge_for(config: &EvalConfig) -> Result<Box<dyn Judge>, Error> {
    match config.judge_provider.to_lowercase().as_str() {
        "google" => Ok(Box::new(gemini::GeminiJudge::from_env(
            config.judge_model.clone(),
            config.temperature,
        )?)),
        "openai" => Err(Error::NotSupported("openai".to_string())),
        other => Err(Error::UnknownProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_provider(provider: &str) -> EvalConfig {
        EvalConfig::from_yaml(&format!(
            "input_file: in.csv\noutput_file: out.json\njudge_provider: {provider}\ncolumns:\n  question_col: q\n  answer_col: a\n  capability_col: c\n"
        ))
        .unwrap()
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = judge_for(&config_with_provider("llama")).unwrap_err();
        match err {
            Error::UnknownProvider(name) => assert_eq!(name, "llama"),
            other => panic!("expected UnknownProvider, got {other:?}"),
        }
    }

    #[test]
    fn declared_but_unimplemented_provider_is_distinct() {
        let err = judge_for(&config_with_provider("OpenAI")).unwrap_err();
        assert!(matches!(err, Error::NotSupported(_)));
    }
}
