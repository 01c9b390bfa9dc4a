//! Batch evaluation of question/answer pairs with an LLM judge.
//!
//! Flow: [`config::EvalConfig`] → [`dataset::load_records`] →
//! [`pipeline::Pipeline`] (per record: prompt → judge) →
//! [`report::Reporter`]. Execution is sequential by design; the only
//! rate-limit policy is a fixed inter-record delay.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod judge;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod report;

pub use config::EvalConfig;
pub use errors::Error;
pub use model::{EvaluatedRecord, Evaluation, Record};
