use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::application::AppError;
use crate::domain::{Cents, LedgerEntry, create_entry};

/// Input layout for entry files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Csv,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension, falling back to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// One raw entry as found in an input file. Amounts are in cents.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    pub date: String,
    #[serde(default)]
    pub description: String,
    pub amount: Cents,
}

impl EntryRecord {
    fn into_entry(self, line: usize) -> Result<LedgerEntry, AppError> {
        create_entry(&self.date, &self.description, self.amount).map_err(|e| {
            AppError::Import {
                line,
                message: e.to_string(),
            }
        })
    }
}

pub fn import_entries<R: Read>(
    reader: R,
    format: InputFormat,
) -> Result<Vec<LedgerEntry>, AppError> {
    match format {
        InputFormat::Csv => import_entries_csv(reader),
        InputFormat::Json => import_entries_json(reader),
    }
}

/// Read entries from CSV with a `date,description,amount` header row.
pub fn import_entries_csv<R: Read>(reader: R) -> Result<Vec<LedgerEntry>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for (line_num, result) in csv_reader.deserialize::<EntryRecord>().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing

        let record = result.map_err(|e| AppError::Import {
            line,
            message: format!("CSV parse error: {}", e),
        })?;
        tracing::debug!(line, date = %record.date, amount = record.amount, "read entry");

        entries.push(record.into_entry(line)?);
    }

    Ok(entries)
}

/// Read entries from a JSON array of `{date, description, amount}` objects.
pub fn import_entries_json<R: Read>(reader: R) -> Result<Vec<LedgerEntry>, AppError> {
    let records: Vec<EntryRecord> = serde_json::from_reader(reader)?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let line = i + 1;
            tracing::debug!(line, date = %record.date, amount = record.amount, "read entry");
            record.into_entry(line)
        })
        .collect()
}
