//! Error taxonomy for a run.
//!
//! Three categories: startup-fatal (config, input table, credential,
//! provider selection), output-fatal ([`Error::Write`]), and
//! per-record recoverable. The last category never appears here:
//! judge and driver failures for a single record are absorbed into
//! sentinel [`crate::model::Evaluation`] values so the batch keeps
//! going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("failed to read config: {0}")]
    ConfigRead(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("unsupported input format `.{0}` (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("missing columns in input table: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("credential not set: {0}")]
    MissingCredential(&'static str),

    #[error("unknown judge provider: {0}")]
    UnknownProvider(String),

    #[error("judge provider `{0}` is not implemented yet")]
    NotSupported(String),

    #[error("failed to read input table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),
}
