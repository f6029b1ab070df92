use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use casefill_model::{CasefillError, Result};

/// In-memory CSV table: one header row plus string cells.
///
/// Rows are padded to the header width so every column index is valid; the
/// empty string is the missing-value marker throughout the pipeline.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the reserved `case_id` column, if present.
    pub fn case_id_index(&self) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.split(casefill_model::HEADER_DELIMITER).next()
                == Some(casefill_model::CASE_ID))
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a source CSV into memory.
///
/// The first record is the header row; later records are padded or truncated
/// to the header width. Rows that are entirely blank are skipped; rows wider
/// than the header keep their first `headers.len()` fields and log a warning
/// for the dropped remainder.
///
/// # Errors
///
/// Returns [`CasefillError::Io`] or [`CasefillError::Message`] when the file
/// cannot be read or a record is malformed.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| CasefillError::Message(format!("read csv {}: {error}", path.display())))?;
    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|error| {
                CasefillError::Message(format!("read header {}: {error}", path.display()))
            })?
            .iter()
            .map(normalize_header)
            .collect(),
        None => {
            return Ok(CsvTable {
                headers: Vec::new(),
                rows: Vec::new(),
            });
        }
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|error| {
            CasefillError::Message(format!("read record {}: {error}", path.display()))
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if record.len() > headers.len() {
            warn!(
                row = rows.len(),
                field_count = record.len(),
                column_count = headers.len(),
                "record wider than header; extra fields dropped"
            );
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_case_id_column_by_bare_segment() {
        let table = CsvTable {
            headers: vec!["name||text".to_string(), "case_id".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.case_id_index(), Some(1));
    }

    #[test]
    fn case_id_index_absent() {
        let table = CsvTable {
            headers: vec!["name||text".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.case_id_index(), None);
    }
}
