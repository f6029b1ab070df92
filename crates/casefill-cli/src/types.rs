use std::path::PathBuf;

use casefill_transform::CodecWarning;

/// Outcome of one answer-generation run.
#[derive(Debug)]
pub struct AnswerRunResult {
    /// Source question CSV.
    pub source: PathBuf,
    /// Rewritten answer CSV (absent on dry runs).
    pub answer_csv: Option<PathBuf>,
    /// Payload JSON file (absent on dry runs).
    pub payload_json: Option<PathBuf>,
    /// Data rows read from the source table.
    pub row_count: usize,
    /// Columns in the source table.
    pub column_count: usize,
    /// Payloads built (rows with a non-empty `case_id`).
    pub payload_count: usize,
    /// Soft per-cell failures accumulated during transformation.
    pub warnings: Vec<CodecWarning>,
}
