//! Per-datatype cell encoders.
//!
//! Each codec is a pure function of `(descriptor, raw cell)` plus, for file
//! cells, read-only filesystem access. One implementation exists per
//! `datatype x multiplicity` variant, selected by explicit dispatch, so each
//! encoding combination is individually testable.
//!
//! Missing-value policy: an empty cell maps to the empty string (single) or
//! `[]` (multi), never to an error.

use chrono::{NaiveDate, NaiveDateTime, TimeZone};

use casefill_model::{ColumnDescriptor, DataType, EMPTY_MULTI, PipelineOptions};

use crate::files::encode_asset;
use crate::warning::CodecFailure;

/// Source format for `date` cells.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Source format for `date_time` cells.
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Separator between values of a non-file multi cell.
pub const MULTI_SEPARATOR: char = ',';

/// Separator between filenames of a file multi cell.
pub const FILE_SEPARATOR: char = '\\';

/// Encodes one cell according to its column descriptor.
///
/// Returns the encoded value together with any soft failures; the cell value
/// is always usable even when failures occurred.
pub fn encode_cell(
    descriptor: &ColumnDescriptor,
    raw: &str,
    options: &PipelineOptions,
) -> (String, Vec<CodecFailure>) {
    if descriptor.is_case_id() {
        return (raw.to_string(), Vec::new());
    }
    if descriptor.is_multi {
        encode_multi(descriptor.data_type, raw, options)
    } else {
        let (value, failure) = encode_single(descriptor.data_type, raw, options);
        (value, failure.into_iter().collect())
    }
}

/// Single-value encoding for one datatype.
pub fn encode_single(
    data_type: DataType,
    raw: &str,
    options: &PipelineOptions,
) -> (String, Option<CodecFailure>) {
    if raw.is_empty() {
        return (String::new(), None);
    }
    match data_type {
        DataType::Date => match parse_epoch(raw, false, options) {
            Some(epoch) => (epoch.to_string(), None),
            // Unparseable dates pass through unchanged rather than aborting.
            None => (
                raw.to_string(),
                Some(CodecFailure::new(format!(
                    "unparseable date `{raw}` (expected DD-MM-YYYY)"
                ))),
            ),
        },
        DataType::DateTime => match parse_epoch(raw, true, options) {
            Some(epoch) => (epoch.to_string(), None),
            None => (
                raw.to_string(),
                Some(CodecFailure::new(format!(
                    "unparseable date_time `{raw}` (expected DD-MM-YYYY HH:MM:SS)"
                ))),
            ),
        },
        DataType::Number | DataType::Text => (raw.to_string(), None),
        DataType::File => match encode_asset(raw, options) {
            Ok(uri) => (uri, None),
            Err(failure) => (String::new(), Some(failure)),
        },
    }
}

/// Multi-value encoding. File cells split on backslash and embed each
/// filename; every other datatype splits on comma and quotes the values
/// as-is.
pub fn encode_multi(
    data_type: DataType,
    raw: &str,
    options: &PipelineOptions,
) -> (String, Vec<CodecFailure>) {
    if raw.is_empty() {
        return (EMPTY_MULTI.to_string(), Vec::new());
    }
    let mut failures = Vec::new();
    let items: Vec<String> = match data_type {
        DataType::File => raw
            .split(FILE_SEPARATOR)
            .map(|filename| {
                let encoded = match encode_asset(filename, options) {
                    Ok(uri) => uri,
                    Err(failure) => {
                        failures.push(failure);
                        String::new()
                    }
                };
                quote(&encoded)
            })
            .collect(),
        _ => raw.split(MULTI_SEPARATOR).map(quote).collect(),
    };
    (format!("[{}]", items.join(", ")), failures)
}

/// JSON string-escapes one array element.
fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}

/// Interprets a source date at the configured fixed offset and returns its
/// Unix timestamp in seconds.
fn parse_epoch(raw: &str, is_datetime: bool, options: &PipelineOptions) -> Option<i64> {
    let naive = if is_datetime {
        NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).ok()?
    } else {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()?
            .and_hms_opt(0, 0, 0)?
    };
    options
        .utc_offset
        .from_local_datetime(&naive)
        .single()
        .map(|moment| moment.timestamp())
}
