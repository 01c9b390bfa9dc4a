//! Report artifacts: one structured JSON file with full record
//! fidelity, one flat CSV next to it for spreadsheet consumers.

pub mod progress;

use crate::errors::Error;
use crate::model::EvaluatedRecord;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// UTF-8 byte-order mark. Excel needs it to detect the encoding of
/// non-Latin-script payloads.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub struct Reporter {
    output_path: PathBuf,
}

impl Reporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Path of the flat artifact: the configured output path with its
    /// extension swapped to `.csv`.
    pub fn csv_path(&self) -> PathBuf {
        self.output_path.with_extension("csv")
    }

    /// Write both artifacts, creating missing output directories.
    pub fn save(&self, records: &[EvaluatedRecord]) -> Result<(), Error> {
        if let Some(dir) = self.output_path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(Error::Write)?;
            }
        }
        self.write_json(records)?;
        self.write_csv(records)?;
        info!(
            json = %self.output_path.display(),
            csv = %self.csv_path().display(),
            "report written"
        );
        Ok(())
    }

    fn write_json(&self, records: &[EvaluatedRecord]) -> Result<(), Error> {
        let body = serde_json::to_string_pretty(records).map_err(|e| Error::Write(e.into()))?;
        std::fs::write(&self.output_path, body).map_err(Error::Write)
    }

    /// Fixed preferred column order; the ground-truth column is
    /// included only when at least one record carries a value.
    fn write_csv(&self, records: &[EvaluatedRecord]) -> Result<(), Error> {
        let with_ground_truth = records.iter().any(|r| r.ground_truth.is_some());

        let mut buf: Vec<u8> = Vec::new();
        buf.write_all(UTF8_BOM).map_err(Error::Write)?;
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            let mut header = vec!["id", "score", "reasoning", "question", "answer"];
            if with_ground_truth {
                header.push("ground_truth");
            }
            header.push("capability");
            writer.write_record(&header).map_err(io_write)?;

            for record in records {
                let mut row = vec![
                    record.id.to_string(),
                    record.score.to_string(),
                    record.reasoning.clone(),
                    record.question.clone(),
                    record.answer.clone(),
                ];
                if with_ground_truth {
                    row.push(record.ground_truth.clone().unwrap_or_default());
                }
                row.push(record.capability.clone());
                writer.write_record(&row).map_err(io_write)?;
            }
            writer.flush().map_err(Error::Write)?;
        }
        std::fs::write(self.csv_path(), buf).map_err(Error::Write)
    }
}

fn io_write(err: csv::Error) -> Error {
    Error::Write(std::io::Error::other(err))
}
