// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Command-line arguments for `ganttdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ganttdag",
    version,
    about = "Compute an earliest-start schedule for a task DAG and print it as a timeline table.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project file (TOML).
    ///
    /// Default: `Ganttdag.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Schedule the built-in sample project instead of reading `--config`.
    #[arg(long)]
    pub sample: bool,

    /// Output format for the schedule table.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the schedule table to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GANTTDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print tasks and dependencies, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
