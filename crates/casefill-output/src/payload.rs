//! Payload construction from the transformed table.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::warn;

use casefill_ingest::CsvTable;
use casefill_model::{AnswerEntry, AnswerPayload, CasefillError, EMPTY_MULTI, Result};

/// Builds one payload per row with a non-empty `case_id`.
///
/// Each payload carries one answer per non-`case_id` column, in table column
/// order. The empty-multi sentinel `[]` is normalized to the empty string so
/// "no values" submits as blank. Rows without a `case_id` are skipped
/// silently; a table with no `case_id` column at all yields no payloads.
pub fn build_payloads(table: &CsvTable) -> Vec<AnswerPayload> {
    let Some(case_idx) = table.case_id_index() else {
        warn!("table has no case_id column; no payloads built");
        return Vec::new();
    };
    let mut payloads = Vec::new();
    for row in &table.rows {
        let case_id = row[case_idx].as_str();
        if case_id.is_empty() {
            continue;
        }
        let mut payload = AnswerPayload::new(case_id);
        for (col_idx, header) in table.headers.iter().enumerate() {
            if col_idx == case_idx {
                continue;
            }
            let value = row[col_idx].as_str();
            let field_value = if value == EMPTY_MULTI { "" } else { value };
            payload
                .answers
                .push(AnswerEntry::customer(header, field_value));
        }
        payloads.push(payload);
    }
    payloads
}

/// Writes the payload list as pretty, UTF-8, non-ASCII-preserving JSON.
///
/// # Errors
///
/// Returns a fatal error when the file cannot be created or serialized.
pub fn write_payload_json(payloads: &[AnswerPayload], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), payloads)
        .map_err(|error| CasefillError::Message(format!("write json {}: {error}", path.display())))
}
