//! CLI argument definitions for the import tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "rta",
    version,
    about = "Risk Trade Admin - bulk import tooling for risk-transaction records",
    long_about = "Bulk-import risk-transaction CSV files into canonical records.\n\n\
                  Rows are normalized field by field; unusable values are replaced\n\
                  with documented defaults and reported per line, so one bad row\n\
                  never sinks the batch."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Allow raw cell values (phone and certificate numbers) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file and report the per-line outcome.
    Import(ImportArgs),

    /// Write the header-only import template CSV.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the outcome as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Also write the outcome as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Write the accepted records back out as a canonical CSV.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
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
