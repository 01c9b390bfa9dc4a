//! Run configuration, loaded once from YAML and immutable thereafter.

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maps source-table column names onto the canonical record shape.
/// The ground-truth column is optional; everything else is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub question_col: String,
    pub answer_col: String,
    pub capability_col: String,
    #[serde(default)]
    pub ground_truth_col: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub columns: ColumnMapping,
    #[serde(default = "default_provider")]
    pub judge_provider: String,
    #[serde(default = "default_model")]
    pub judge_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_provider() -> String {
    "google".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_language() -> String {
    "Arabic".to_string()
}

impl EvalConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(Error::ConfigRead)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
