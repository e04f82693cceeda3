//! CLI argument definitions for the cost report summarizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hcris",
    version,
    about = "HCRIS cost report summarizer",
    long_about = "Summarize HCRIS hospital cost report archives.\n\n\
                  Opens a fixed-schema ZIP archive, derives the reporting\n\
                  metrics, and writes one summarized CSV table per run."
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
    /// Summarize one cost report archive into a CSV table.
    Summarize(SummarizeArgs),

    /// List the worksheets and coordinates the summarizer reads.
    Worksheets,
}

#[derive(Parser)]
pub struct SummarizeArgs {
    /// Path to the cost report ZIP archive (or member directory with --from-dir).
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output CSV path (default: <archive stem>_summary.csv next to the archive).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read the three members from a directory instead of a ZIP archive.
    #[arg(long = "from-dir")]
    pub from_dir: bool,

    /// Leave missing cells empty instead of filling them with zero.
    #[arg(long = "preserve-missing")]
    pub preserve_missing: bool,

    /// Treat a metric whose worksheet column is absent as all-missing
    /// instead of aborting the run.
    #[arg(long = "lenient-metrics")]
    pub lenient_metrics: bool,
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
