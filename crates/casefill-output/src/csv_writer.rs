//! Rewritten-CSV persistence.
//!
//! The transformed table is written back as an auditable intermediate
//! artifact: every non-numeric field quoted, backslash as the escape
//! character, `case_id` first in the header row with the remaining columns in
//! source order.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use casefill_ingest::CsvTable;
use casefill_model::{CasefillError, Result};

/// Input-role token swapped out of the source filename.
pub const QUESTION_TOKEN: &str = "question";

/// Output-role token swapped into the output filename.
pub const ANSWER_TOKEN: &str = "answer";

/// Derives the answer CSV path from the source path.
///
/// The filename swaps `question` for `answer`; when the source name carries
/// no such token, `-answers` is appended to the stem so the source file is
/// never overwritten. An explicit output directory overrides the source
/// directory.
pub fn answer_csv_path(source: &Path, output_dir: Option<&Path>) -> PathBuf {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("answers.csv");
    let renamed = if name.contains(QUESTION_TOKEN) {
        name.replace(QUESTION_TOKEN, ANSWER_TOKEN)
    } else {
        let (stem, extension) = match name.rsplit_once('.') {
            Some((stem, extension)) => (stem, extension),
            None => (name, "csv"),
        };
        format!("{stem}-answers.{extension}")
    };
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| source.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(renamed)
}

/// Derives the payload JSON path from the answer CSV path.
pub fn payload_json_path(answer_csv: &Path) -> PathBuf {
    answer_csv.with_extension("json")
}

/// Writes the transformed table to `path`.
///
/// The whole table is already in memory, so either the complete file is
/// written or the error surfaces before any row goes out.
///
/// # Errors
///
/// Returns a fatal error when the destination cannot be created or written.
pub fn write_answer_csv(table: &CsvTable, path: &Path) -> Result<()> {
    let order = column_order(table);
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .double_quote(false)
        .escape(b'\\')
        .from_path(path)
        .map_err(|error| {
            CasefillError::Message(format!("create csv {}: {error}", path.display()))
        })?;
    writer
        .write_record(order.iter().map(|&idx| table.headers[idx].as_str()))
        .map_err(|error| CasefillError::Message(format!("write header: {error}")))?;
    for row in &table.rows {
        writer
            .write_record(order.iter().map(|&idx| row[idx].as_str()))
            .map_err(|error| CasefillError::Message(format!("write row: {error}")))?;
    }
    writer
        .flush()
        .map_err(|error| CasefillError::Message(format!("flush csv: {error}")))?;
    debug!(path = %path.display(), row_count = table.rows.len(), "answer csv written");
    Ok(())
}

/// Column order for output: `case_id` first, everything else in source
/// order.
fn column_order(table: &CsvTable) -> Vec<usize> {
    let mut order: Vec<usize> = (0..table.headers.len()).collect();
    if let Some(case_idx) = table.case_id_index() {
        order.retain(|&idx| idx != case_idx);
        order.insert(0, case_idx);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_question_token() {
        let path = answer_csv_path(Path::new("/data/P0questionTestCase.csv"), None);
        assert_eq!(path, PathBuf::from("/data/P0answerTestCase.csv"));
    }

    #[test]
    fn appends_suffix_when_token_absent() {
        let path = answer_csv_path(Path::new("/data/cases.csv"), None);
        assert_eq!(path, PathBuf::from("/data/cases-answers.csv"));
    }

    #[test]
    fn honors_output_dir() {
        let path = answer_csv_path(Path::new("/data/question.csv"), Some(Path::new("/out")));
        assert_eq!(path, PathBuf::from("/out/answer.csv"));
    }

    #[test]
    fn json_path_swaps_extension() {
        assert_eq!(
            payload_json_path(Path::new("/out/answer.csv")),
            PathBuf::from("/out/answer.json")
        );
    }
}
