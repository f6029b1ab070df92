use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use casefill_ingest::{parse_table_schema, read_csv_table};
use casefill_model::{PipelineOptions, parse_utc_offset};

use casefill_cli::config::{Environment, load_environment};
use casefill_cli::pipeline::run_answer_pipeline;
use casefill_cli::types::AnswerRunResult;

use crate::cli::{AnswerArgs, SchemaArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_answer(args: &AnswerArgs) -> Result<AnswerRunResult> {
    let environment = match &args.config {
        Some(path) => load_environment(path)?,
        None => Environment::default(),
    };
    let options = build_options(args, &environment)?;
    run_answer_pipeline(
        &args.csv_path,
        &options,
        args.output_dir.as_deref(),
        args.dry_run,
    )
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let table = read_csv_table(&args.csv_path)
        .with_context(|| format!("read {}", args.csv_path.display()))?;
    let descriptors = parse_table_schema(&table).context("parse table schema")?;
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Multi"),
    ]);
    apply_table_style(&mut out);
    for descriptor in &descriptors {
        let type_label = if descriptor.is_case_id() {
            "-"
        } else {
            descriptor.data_type.as_str()
        };
        out.add_row(vec![
            Cell::new(&descriptor.field_name),
            Cell::new(type_label),
            Cell::new(if descriptor.is_multi { "yes" } else { "no" }),
        ]);
    }
    println!("{out}");
    Ok(())
}

/// CLI flags take precedence over the environment file, which takes
/// precedence over defaults.
fn build_options(args: &AnswerArgs, environment: &Environment) -> Result<PipelineOptions> {
    let mut options = PipelineOptions::default();
    if let Some(dir) = environment.asset_dir.as_ref() {
        options = options.with_asset_dir(dir);
    }
    if let Some(dir) = args.assets_dir.as_ref() {
        options = options.with_asset_dir(dir);
    }
    let offset_source = args
        .utc_offset
        .as_deref()
        .or(environment.utc_offset.as_deref());
    if let Some(raw) = offset_source {
        let offset = parse_utc_offset(raw).with_context(|| format!("parse utc offset `{raw}`"))?;
        options = options.with_utc_offset(offset);
    }
    Ok(options)
}
