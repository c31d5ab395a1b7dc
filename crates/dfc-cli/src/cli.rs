//! CLI argument definitions for the facility census cleaner.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dfc",
    version,
    about = "Facility census cleaner - normalize detention facility rosters",
    long_about = "Clean an irregular detention facility roster into an\n\
                  analyzable table plus summary statistics.\n\n\
                  Normalizes names and cities, validates state codes,\n\
                  recovers mixed-format inspection dates, and reports every\n\
                  fallback substitution as a data-quality issue."
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
    /// Clean a roster file and write the analyzable table.
    Clean(CleanArgs),

    /// List the state and territory codes accepted as valid.
    States,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the roster export.
    #[arg(value_name = "ROSTER_FILE")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fixed number of preamble lines before the header row.
    ///
    /// When omitted, the header row is located heuristically.
    #[arg(long = "skip-lines", value_name = "N")]
    pub skip_lines: Option<usize>,

    /// Field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Reference date for inspection-age statistics (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
