//! Remarketing XLS to XML converter CLI.

use clap::{ColorChoice, Parser};
use rmk_cli::config::ConverterConfig;
use rmk_cli::logging::{LogConfig, LogFormat, init_logging};
use rmk_cli::pipeline::run_convert;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(run(&cli));
}

/// Run the conversion, converting every failure into a non-zero exit code.
fn run(cli: &Cli) -> i32 {
    let config =
        match ConverterConfig::resolve(&cli.source_file, &cli.output_path, &cli.client_config) {
            Ok(config) => config,
            Err(error) => {
                error!("invalid configuration: {error:#}");
                return 1;
            }
        };

    match run_convert(&config) {
        Ok(summary) => {
            info!("conversion successful");
            println!(
                "Converted {} record(s) to {}",
                summary.records,
                summary.output_file.display()
            );
            0
        }
        Err(error) => {
            error!("conversion failed: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
