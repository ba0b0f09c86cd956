//! CLI argument definitions for the remarketing converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rmk-convert",
    version,
    about = "Convert a remarketing XLS workbook to the RSA XML format",
    long_about = "Convert tabular remarketing records from a spreadsheet workbook into a\n\
                  fixed-schema XML document, driven by a per-client configuration file\n\
                  that maps worksheet columns to semantic fields."
)]
pub struct Cli {
    /// XLS/XLSX file to convert.
    #[arg(short = 's', long = "sourceFile", value_name = "FILE")]
    pub source_file: PathBuf,

    /// Output folder (default is the current folder, created if missing).
    #[arg(short = 'o', long = "outputPath", value_name = "DIR", default_value = ".")]
    pub output_path: PathBuf,

    /// Path to the client configuration JSON file.
    #[arg(short = 'c', long = "ClientConfig", value_name = "FILE")]
    pub client_config: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
