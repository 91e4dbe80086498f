//! CLI argument definitions for the cadastro validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cadastro-validator",
    version,
    about = "Validate cadastro CSV/XML uploads against the fixed record layout",
    long_about = "Validate cadastro upload files against the fixed 22-column layout.\n\n\
                  Checks column names and order, allowed value sets, CPF/CEP/date/phone\n\
                  formats, and the no-diacritics character restriction, then reports\n\
                  every violation with its row and column."
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
    /// Validate an uploaded CSV or XML file.
    Check(CheckArgs),

    /// Print the expected column layout and per-column rules.
    Layout,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV or XML file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write a machine-readable JSON report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
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
