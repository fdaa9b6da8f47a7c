//! CLI argument definitions for the listing profiler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listing-profiler",
    version,
    about = "Univariate profiler for rental-listing data",
    long_about = "Compute per-field frequency tables and Sturges-rule histograms\n\
                  over a rental-listing CSV file, write them as delimited files\n\
                  and ASCII bar charts, and print top-5 summaries."
)]
pub struct Cli {
    /// Path to the listing CSV file.
    #[arg(value_name = "DATA_FILE", default_value = "df_tratado.csv")]
    pub data_file: PathBuf,

    /// Output directory for generated report files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
