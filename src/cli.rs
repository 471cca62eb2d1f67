// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::UnknownDependencyPolicy;

/// Command-line arguments for `schedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schedag",
    version,
    about = "Greedy shortest-job-first list scheduling of dependent tasks onto interchangeable resources.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML).
    ///
    /// Default: `Schedag.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Schedag.toml")]
    pub config: String,

    /// Output format for the produced schedule.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Override `[config].unknown_dependencies` from the task file.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub unknown_deps: Option<UnknownDependencyPolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCHEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate and print the problem, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// How the schedule is written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
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
