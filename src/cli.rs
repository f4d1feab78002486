// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::PathStrategy;

/// Command-line arguments for `citysched`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "citysched",
    version,
    about = "Find SCCs, a topological order and critical paths of a task graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a graph config file (TOML).
    ///
    /// If omitted, the built-in 8-node example graph is analysed.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path reconstruction strategy (scan, parent).
    ///
    /// Overrides `[config].path_strategy`.
    #[arg(long, value_name = "STRATEGY")]
    pub path_strategy: Option<PathStrategy>,

    /// Endpoint of the reported critical path.
    ///
    /// Overrides `[config].target`; defaults to the farthest reached node.
    #[arg(long, value_name = "NODE")]
    pub target: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CITYSCHED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph, but don't run any analysis.
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
