// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::Delimiter;

/// Command-line arguments for `husched`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "husched",
    version,
    about = "Schedule unit-time tasks on identical machines with Hu's algorithm.",
    long_about = None
)]
pub struct CliArgs {
    /// Edge-list file: one `predecessor,successor` pair per line.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of identical machines.
    ///
    /// Overrides `[schedule].machines` from the config file (default 3).
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub machines: Option<i64>,

    /// Path to a config file (TOML).
    ///
    /// If omitted, `Husched.toml` in the current directory is used when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Separator between task ids: a single character, `tab` or `whitespace`.
    ///
    /// Overrides `[input].delimiter` from the config file (default `,`).
    #[arg(short, long, value_name = "DELIM")]
    pub delimiter: Option<Delimiter>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HUSCHED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Classify the graph and print task levels, but don't schedule.
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
