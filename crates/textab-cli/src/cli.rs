//! CLI argument definitions for textab.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "textab",
    version,
    about = "textab - Build LaTeX documents from tabular data",
    long_about = "Build a LaTeX document from a CSV or TSV sheet.\n\n\
                  Each data row is substituted into an entry template wherever a\n\
                  {{column}} placeholder appears, with LaTeX special characters\n\
                  escaped, and the entries are wrapped in a preamble and postamble."
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
    /// Build the output document from a sheet and templates.
    Build(BuildArgs),

    /// Show a sheet's columns and the placeholders a template uses.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the sheet providing one record per row.
    #[arg(value_name = "SHEET", default_value = "sheet.csv")]
    pub sheet: PathBuf,

    /// Entry template applied once per record; {{column}} markers are
    /// replaced by that row's value.
    #[arg(long = "template", value_name = "PATH", default_value = "style.tex")]
    pub template: PathBuf,

    /// Preamble prepended to the document.
    #[arg(long = "preamble", value_name = "PATH", default_value = "preamble.tex")]
    pub preamble: PathBuf,

    /// Optional postamble appended after the last entry.
    #[arg(long = "postamble", value_name = "PATH")]
    pub postamble: Option<PathBuf>,

    /// Output path for the generated document.
    #[arg(long = "output", value_name = "PATH", default_value = "output.tex")]
    pub output: PathBuf,

    /// Sheet format (auto detects from the file extension).
    #[arg(long = "sheet-format", value_enum, default_value = "auto")]
    pub sheet_format: SheetFormatArg,

    /// What to do when a record lacks a field the template names.
    ///
    /// abort: stop at the first missing field (default).
    /// skip: drop the record and continue.
    /// report: drop the record, continue, and exit nonzero at the end.
    #[arg(long = "on-missing", value_enum, default_value = "abort")]
    pub on_missing: OnMissingArg,

    /// Render and validate without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a machine-readable JSON run report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the sheet to inspect.
    #[arg(value_name = "SHEET", default_value = "sheet.csv")]
    pub sheet: PathBuf,

    /// Also check this template's placeholders against the sheet's columns.
    #[arg(long = "template", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Sheet format (auto detects from the file extension).
    #[arg(long = "sheet-format", value_enum, default_value = "auto")]
    pub sheet_format: SheetFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SheetFormatArg {
    Auto,
    Csv,
    Tsv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OnMissingArg {
    Abort,
    Skip,
    Report,
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
