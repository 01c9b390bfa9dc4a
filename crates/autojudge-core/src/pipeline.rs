//! Sequential evaluation driver: one record in flight at a time.

use crate::judge::Judge;
use crate::model::{EvaluatedRecord, Evaluation, Record};
use crate::prompt;
use crate::report::progress::{ProgressEvent, ProgressSink};
use std::time::Duration;
use tracing::warn;

/// Produces the instruction string for one record.
///
/// Injectable so the driver's per-record guard stays exercisable; the
/// default source wraps [`prompt::build_prompt`] and cannot fail.
pub trait PromptSource: Send + Sync {
    fn build(&self, record: &Record, language: &str) -> anyhow::Result<String>;
}

/// Default source: rubric-backed prompt assembly.
pub struct RubricPrompts;

impl PromptSource for RubricPrompts {
    fn build(&self, record: &Record, language: &str) -> anyhow::Result<String> {
        Ok(prompt::build_prompt(
            &record.capability,
            &record.question,
            &record.answer,
            record.ground_truth.as_deref(),
            language,
        ))
    }
}

/// Inter-record pacing policy. Fixed delay is a crude rate-limit
/// courtesy toward the backend, not adaptive backoff.
#[derive(Debug, Clone, Copy)]
pub enum Pacing {
    None,
    Fixed(Duration),
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Fixed(Duration::from_secs(1))
    }
}

impl Pacing {
    async fn pause(self) {
        if let Pacing::Fixed(delay) = self {
            tokio::time::sleep(delay).await;
        }
    }
}

pub struct Pipeline {
    judge: Box<dyn Judge>,
    prompts: Box<dyn PromptSource>,
    language: String,
    pacing: Pacing,
    progress: Option<ProgressSink>,
}

impl Pipeline {
    pub fn new(judge: Box<dyn Judge>, language: impl Into<String>) -> Self {
        Self {
            judge,
            prompts: Box::new(RubricPrompts),
            language: language.into(),
            pacing: Pacing::default(),
            progress: None,
        }
    }

    pub fn with_prompts(mut self, prompts: Box<dyn PromptSource>) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Evaluate every record in order. N inputs always yield N
    /// outputs: an error in the prompt/merge step (distinct from the
    /// judge's own fail-soft path) degrades that record to the
    /// score -1 sentinel and the loop continues. The pacing delay is
    /// applied after each record.
    pub async fn run(&self, records: Vec<Record>) -> Vec<EvaluatedRecord> {
        let total = records.len();
        let mut results = Vec::with_capacity(total);
        for record in records {
            let evaluation = match self.prompts.build(&record, &self.language) {
                Ok(prompt_text) => self.judge.evaluate(&prompt_text).await,
                Err(err) => {
                    warn!(id = record.id, error = %err, "record failed before judging");
                    Evaluation::pipeline_error(err)
                }
            };
            results.push(EvaluatedRecord::from_parts(record, evaluation));
            if let Some(sink) = &self.progress {
                sink(ProgressEvent {
                    done: results.len(),
                    total,
                });
            }
            self.pacing.pause().await;
        }
        results
    }
}
