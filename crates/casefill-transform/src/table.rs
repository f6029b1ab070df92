//! Whole-table transformation.
//!
//! Applies the matching codec variant to every cell of every non-`case_id`
//! column, then rewrites each header to its bare field name. Cells are
//! independent of one another, so file columns (the only ones doing I/O) are
//! encoded across rows on the rayon pool; results are written once per cell.

use rayon::prelude::*;
use tracing::{debug, warn};

use casefill_ingest::CsvTable;
use casefill_model::{ColumnDescriptor, DataType, PipelineOptions};

use crate::codec::encode_cell;
use crate::warning::{CodecFailure, CodecWarning};

/// Transformed table plus accumulated soft failures.
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub table: CsvTable,
    pub warnings: Vec<CodecWarning>,
}

/// Transforms every column of a table according to its parsed schema.
///
/// `descriptors` must be the output of parsing `table.headers`, in column
/// order. The returned table has the same row and column counts as the
/// input, with headers renamed to bare field names.
pub fn transform_table(
    table: &CsvTable,
    descriptors: &[ColumnDescriptor],
    options: &PipelineOptions,
) -> TransformReport {
    debug_assert_eq!(table.headers.len(), descriptors.len());
    let mut rows = table.rows.clone();
    let mut warnings = Vec::new();

    for (col_idx, descriptor) in descriptors.iter().enumerate() {
        if descriptor.is_case_id() {
            continue;
        }
        let encoded = encode_column(&rows, col_idx, descriptor, options);
        for (row_idx, (value, failures)) in encoded.into_iter().enumerate() {
            rows[row_idx][col_idx] = value;
            locate_failures(&mut warnings, failures, descriptor, row_idx);
        }
    }

    for warning in &warnings {
        warn!(column = %warning.column, row = warning.row, reason = %warning.reason, "cell degraded");
    }
    debug!(
        row_count = rows.len(),
        column_count = descriptors.len(),
        warning_count = warnings.len(),
        "table transformed"
    );

    TransformReport {
        table: CsvTable {
            headers: descriptors
                .iter()
                .map(|descriptor| descriptor.field_name.clone())
                .collect(),
            rows,
        },
        warnings,
    }
}

/// Encodes one column across all rows. File columns read from disk, so they
/// run on the rayon pool; everything else stays serial.
fn encode_column(
    rows: &[Vec<String>],
    col_idx: usize,
    descriptor: &ColumnDescriptor,
    options: &PipelineOptions,
) -> Vec<(String, Vec<CodecFailure>)> {
    if descriptor.data_type == DataType::File {
        rows.par_iter()
            .map(|row| encode_cell(descriptor, &row[col_idx], options))
            .collect()
    } else {
        rows.iter()
            .map(|row| encode_cell(descriptor, &row[col_idx], options))
            .collect()
    }
}

fn locate_failures(
    warnings: &mut Vec<CodecWarning>,
    failures: Vec<CodecFailure>,
    descriptor: &ColumnDescriptor,
    row_idx: usize,
) {
    warnings.extend(
        failures
            .into_iter()
            .map(|failure| CodecWarning::located(failure, &descriptor.field_name, row_idx)),
    );
}
