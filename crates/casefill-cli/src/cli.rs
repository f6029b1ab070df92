//! CLI argument definitions for the casefill tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "casefill",
    version,
    about = "Casefill - Generate typed case answers from question CSV files",
    long_about = "Convert question CSV files with header-encoded field schemas\n\
                  into API-ready answer payloads.\n\n\
                  Dates become Unix timestamps, multi-value cells become JSON\n\
                  arrays, and file references are embedded as base64 data URIs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the answer CSV and payload JSON from a question CSV.
    Answer(AnswerArgs),

    /// Show the parsed column schema of a question CSV.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct AnswerArgs {
    /// Path to the question CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_path: PathBuf,

    /// Directory holding referenced asset files (default: answers/file).
    #[arg(long = "assets-dir", value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Output directory for generated files (default: alongside the source).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fixed offset for date-to-epoch conversion (default: +00:00).
    #[arg(long = "utc-offset", value_name = "+HH:MM")]
    pub utc_offset: Option<String>,

    /// Environment file (JSON, comments allowed) supplying defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Parse and transform without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the question CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_path: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
