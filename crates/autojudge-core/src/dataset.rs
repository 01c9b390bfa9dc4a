//! Input table loading: CSV or XLSX rows standardized into records.

use crate::config::{ColumnMapping, EvalConfig};
use crate::errors::Error;
use crate::model::Record;
use std::path::Path;
use tracing::info;

/// Load and standardize the input table named by the configuration.
///
/// Fails before any network activity: a missing file, an unsupported
/// extension, or absent required columns abort the run here. Row
/// order is preserved and `id` is the zero-based row position.
pub fn load_records(config: &EvalConfig) -> Result<Vec<Record>, Error> {
    let path = &config.input_file;
    if !path.exists() {
        return Err(Error::DataFileNotFound(path.clone()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let table = match ext.as_str() {
        "csv" => read_csv(path)?,
        "xlsx" => read_xlsx(path)?,
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    };

    let records = standardize(&table, &config.columns)?;
    info!(count = records.len(), path = %path.display(), "loaded input records");
    Ok(records)
}

/// Headers plus rows of string cells, format-agnostic.
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn read_csv(path: &Path) -> Result<Table, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(Table { headers, rows })
}

fn read_xlsx(path: &Path) -> Result<Table, Error> {
    use calamine::{open_workbook, Reader, Xlsx};

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| Error::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet("workbook has no sheets".to_string()))?
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers = rows_iter
        .next()
        .map(|row| row.iter().map(|c| c.to_string().trim().to_string()).collect())
        .unwrap_or_default();
    let rows = rows_iter
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();
    Ok(Table { headers, rows })
}

fn standardize(table: &Table, columns: &ColumnMapping) -> Result<Vec<Record>, Error> {
    let index_of = |name: &str| table.headers.iter().position(|h| h == name);

    let question = index_of(&columns.question_col);
    let answer = index_of(&columns.answer_col);
    let capability = index_of(&columns.capability_col);

    let mut missing = Vec::new();
    for (idx, name) in [
        (question, &columns.question_col),
        (answer, &columns.answer_col),
        (capability, &columns.capability_col),
    ] {
        if idx.is_none() {
            missing.push(name.clone());
        }
    }
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }
    let (question, answer, capability) =
        (question.unwrap(), answer.unwrap(), capability.unwrap());

    // Ground truth is optional twice over: the mapping may be absent,
    // and a mapped column may not exist in the table.
    let ground_truth = columns.ground_truth_col.as_deref().and_then(index_of);

    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(id, row)| {
            let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
            Record {
                id,
                question: cell(question),
                answer: cell(answer),
                capability: cell(capability),
                ground_truth: ground_truth.map(cell).filter(|v| !v.trim().is_empty()),
            }
        })
        .collect();
    Ok(records)
}
