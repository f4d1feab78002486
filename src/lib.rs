// src/lib.rs

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod metrics;
pub mod paths;
pub mod report;
pub mod scc;
pub mod topo;
pub mod types;

use anyhow::Result;
use tracing::debug;

use crate::analysis::{AnalysisOptions, analyze};
use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::config::sample::worked_example;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (or the built-in example graph)
/// - CLI overrides of the analysis options
/// - the analysis pipeline
/// - report rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => worked_example(),
    };

    if args.dry_run {
        print_dry_run(&cfg)?;
        return Ok(());
    }

    let options = resolve_options(&args, &cfg);
    let graph = cfg.graph()?;
    let weighted = cfg.weighted_graph()?;

    let analysis = analyze(&graph, &weighted, options)?;

    println!("=== Smart City Scheduling - Graph Algorithms ===");
    println!();
    println!("Input: {weighted}");
    println!();
    print!("{}", report::render(&analysis, &weighted));
    Ok(())
}

/// CLI flags win over `[config]`.
fn resolve_options(args: &CliArgs, cfg: &ConfigFile) -> AnalysisOptions {
    let mut options = AnalysisOptions::from(&cfg.config);
    if let Some(strategy) = args.path_strategy {
        options.path_strategy = strategy;
    }
    if args.target.is_some() {
        options.target = args.target;
    }
    options
}

/// Simple dry-run output: print the validated graph, run nothing.
fn print_dry_run(cfg: &ConfigFile) -> Result<()> {
    let weighted = cfg.weighted_graph()?;

    println!("citysched dry-run");
    println!("  config.path_strategy = {:?}", cfg.config.path_strategy);
    if let Some(target) = cfg.config.target {
        println!("  config.target = {target}");
    }
    println!();

    let mut out = String::new();
    report::write_weighted(&mut out, &weighted)?;
    print!("{out}");

    debug!("dry-run complete (no analysis)");
    Ok(())
}
