//! Whole-table schema parsing.
//!
//! Every header is decoded to a [`ColumnDescriptor`] before any cell is
//! touched, so a malformed header aborts the run with no output written.

use casefill_model::{CasefillError, ColumnDescriptor, Result};
use tracing::debug;

use crate::csv_table::CsvTable;

/// Parses all column headers of a table into descriptors.
///
/// Descriptors are returned in source column order, one per header.
///
/// # Errors
///
/// Returns a single error listing every malformed header. Nothing downstream
/// runs when this fails.
pub fn parse_table_schema(table: &CsvTable) -> Result<Vec<ColumnDescriptor>> {
    let mut descriptors = Vec::with_capacity(table.headers.len());
    let mut bad_headers = Vec::new();
    for header in &table.headers {
        match ColumnDescriptor::parse(header) {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(error) => bad_headers.push(error.to_string()),
        }
    }
    if !bad_headers.is_empty() {
        return Err(CasefillError::Message(format!(
            "table schema invalid: {}",
            bad_headers.join("; ")
        )));
    }
    debug!(
        column_count = descriptors.len(),
        multi_count = descriptors.iter().filter(|d| d.is_multi).count(),
        "table schema parsed"
    );
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefill_model::DataType;

    fn table(headers: &[&str]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn parses_all_headers_in_order() {
        let descriptors =
            parse_table_schema(&table(&["case_id", "name||text", "files||file||MULTI"]))
                .expect("schema");
        assert_eq!(descriptors.len(), 3);
        assert!(descriptors[0].is_case_id());
        assert_eq!(descriptors[1].data_type, DataType::Text);
        assert_eq!(descriptors[2].data_type, DataType::File);
        assert!(descriptors[2].is_multi);
    }

    #[test]
    fn collects_every_malformed_header() {
        let error = parse_table_schema(&table(&["case_id", "||date", "  ||file"]))
            .expect_err("schema error");
        let message = error.to_string();
        assert!(message.contains("||date"));
        assert!(message.contains("||file"));
    }
}
