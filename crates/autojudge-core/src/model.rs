//! Canonical record shapes flowing through the pipeline.

use serde::{Deserialize, Serialize};

/// One row of the input table, standardized via the configured column
/// mapping. `id` is the zero-based row position at load time, not a
/// user-supplied key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: usize,
    pub question: String,
    pub answer: String,
    pub capability: String,
    pub ground_truth: Option<String>,
}

/// A record with the judge's verdict merged in. `ground_truth` is
/// serialized as `null` when absent so the JSON report keeps full
/// record fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedRecord {
    pub id: usize,
    pub score: i64,
    pub reasoning: String,
    pub question: String,
    pub answer: String,
    pub ground_truth: Option<String>,
    pub capability: String,
}

impl EvaluatedRecord {
    pub fn from_parts(record: Record, evaluation: Evaluation) -> Self {
        Self {
            id: record.id,
            score: evaluation.score,
            reasoning: evaluation.reasoning,
            question: record.question,
            answer: record.answer,
            ground_truth: record.ground_truth,
            capability: record.capability,
        }
    }
}

/// Parsed judge verdict. A well-behaved judge returns a score in 1..=5;
/// the two sentinel forms below are deliberately distinct so reporting
/// can tell "judge degraded" from "pipeline error".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: i64,
    pub reasoning: String,
}

impl Evaluation {
    /// Judge-side fail-soft sentinel: the backend call or response
    /// parse failed. Errors become data, never exceptions.
    pub fn degraded(detail: impl std::fmt::Display) -> Self {
        Self {
            score: 0,
            reasoning: format!("System Error: {detail}"),
        }
    }

    /// Driver-side sentinel: prompt build or merge failed for one
    /// record.
    pub fn pipeline_error(detail: impl std::fmt::Display) -> Self {
        Self {
            score: -1,
            reasoning: format!("Pipeline Error: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_stay_distinct() {
        let judge_side = Evaluation::degraded("connection reset");
        let driver_side = Evaluation::pipeline_error("bad capability cell");
        assert_eq!(judge_side.score, 0);
        assert_eq!(driver_side.score, -1);
        assert!(judge_side.reasoning.starts_with("System Error:"));
        assert!(driver_side.reasoning.starts_with("Pipeline Error:"));
    }

    #[test]
    fn evaluated_record_merges_verdict_onto_record() {
        let record = Record {
            id: 3,
            question: "q".into(),
            answer: "a".into(),
            capability: "math".into(),
            ground_truth: None,
        };
        let merged = EvaluatedRecord::from_parts(
            record,
            Evaluation {
                score: 4,
                reasoning: "ok".into(),
            },
        );
        assert_eq!(merged.id, 3);
        assert_eq!(merged.score, 4);
        assert_eq!(merged.ground_truth, None);
    }
}
