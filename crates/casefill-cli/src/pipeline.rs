//! Answer-generation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the source question CSV into memory
//! 2. **Schema**: Parse every column header into a typed descriptor
//! 3. **Transform**: Apply codecs per column, rename headers to bare names
//! 4. **Output**: Write the answer CSV and the payload JSON
//!
//! A schema failure aborts before the transform stage, so no output file is
//! ever partially written. Soft cell failures accumulate as warnings and
//! never block completion.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use casefill_ingest::{parse_table_schema, read_csv_table};
use casefill_model::PipelineOptions;
use casefill_output::{answer_csv_path, build_payloads, payload_json_path, write_answer_csv, write_payload_json};
use casefill_transform::transform_table;

use crate::types::AnswerRunResult;

/// Runs ingest, schema, transform, and output for one question CSV.
pub fn run_answer_pipeline(
    csv_path: &Path,
    options: &PipelineOptions,
    output_dir: Option<&Path>,
    dry_run: bool,
) -> Result<AnswerRunResult> {
    let source_file = csv_path.display().to_string();
    let run_span = info_span!("answer_run", source_file = %source_file);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let table = info_span!("ingest").in_scope(|| {
        let start = Instant::now();
        let table =
            read_csv_table(csv_path).with_context(|| format!("read {}", csv_path.display()))?;
        info!(
            source_file = %source_file,
            row_count = table.row_count(),
            column_count = table.column_count(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        anyhow::Ok(table)
    })?;
    let row_count = table.row_count();
    let column_count = table.column_count();

    let descriptors = info_span!("schema")
        .in_scope(|| parse_table_schema(&table))
        .context("parse table schema")?;

    let report = info_span!("transform").in_scope(|| {
        let start = Instant::now();
        let report = transform_table(&table, &descriptors, options);
        info!(
            source_file = %source_file,
            row_count = report.table.row_count(),
            warning_count = report.warnings.len(),
            duration_ms = start.elapsed().as_millis(),
            "transform complete"
        );
        report
    });

    let payloads = build_payloads(&report.table);

    let (answer_csv, payload_json) = if dry_run {
        info!(source_file = %source_file, "output skipped (dry run)");
        (None, None)
    } else {
        info_span!("output").in_scope(|| {
            let start = Instant::now();
            let csv_out = answer_csv_path(csv_path, output_dir);
            write_answer_csv(&report.table, &csv_out)
                .with_context(|| format!("write {}", csv_out.display()))?;
            let json_out = payload_json_path(&csv_out);
            write_payload_json(&payloads, &json_out)
                .with_context(|| format!("write {}", json_out.display()))?;
            info!(
                source_file = %source_file,
                answer_csv = %csv_out.display(),
                payload_json = %json_out.display(),
                payload_count = payloads.len(),
                duration_ms = start.elapsed().as_millis(),
                "output complete"
            );
            anyhow::Ok((Some(csv_out), Some(json_out)))
        })?
    };

    info!(
        source_file = %source_file,
        row_count,
        payload_count = payloads.len(),
        warning_count = report.warnings.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "answer run complete"
    );

    Ok(AnswerRunResult {
        source: csv_path.to_path_buf(),
        answer_csv,
        payload_json,
        row_count,
        column_count,
        payload_count: payloads.len(),
        warnings: report.warnings,
    })
}
