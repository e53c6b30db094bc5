// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod input;
pub mod logging;
pub mod types;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_default, load_from_path_with_fs};
use crate::dag::{HuScheduler, LevelMap, Topology, assign_levels, classify};
use crate::errors::{HuschedError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::input::load_graph_with_fs;

/// High-level entry point used by `main.rs`.
///
/// Runs [`execute`] against the real filesystem and prints the report to
/// stdout.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let report = execute(&args, &RealFileSystem)?;
    print!("{report}");
    Ok(())
}

/// Load config and input, then classify and schedule the graph.
///
/// This wires together:
/// - config resolution (`--config`, `Husched.toml`, or defaults)
/// - machine count validation
/// - edge-list loading
/// - classification, levels and Hu scheduling (or levels only with `--dry-run`)
///
/// Returns the text that `run` prints. Nothing is produced on error.
pub fn execute(args: &CliArgs, fs: &dyn FileSystem) -> Result<String> {
    let cfg = resolve_config(args, fs)?;

    let machines = args.machines.unwrap_or_else(|| cfg.machines());
    let scheduler = HuScheduler::from_count(machines)?;
    let delimiter = args.delimiter.unwrap_or_else(|| cfg.delimiter());
    if !delimiter.is_valid() {
        return Err(HuschedError::ConfigError(format!(
            "delimiter {delimiter} cannot separate integer task ids"
        )));
    }
    debug!(machines, %delimiter, "resolved run settings");

    let graph = load_graph_with_fs(fs, &args.input, delimiter)?;
    let topology = classify(&graph)?;
    info!(topology = %topology, "classified {}", args.input.display());

    let mut out = format!("topology: {topology}\n");

    let levels = assign_levels(&graph, &topology)?;

    if args.dry_run {
        out.push_str(&format_levels(&topology, &levels));
        debug!("dry-run complete (no schedule)");
        return Ok(out);
    }

    let schedule = scheduler.schedule_leveled(&graph, &levels)?;

    out.push_str(&format!(
        "machines: {}\n{schedule}\n",
        scheduler.machines()
    ));
    Ok(out)
}

fn resolve_config(args: &CliArgs, fs: &dyn FileSystem) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => {
            let raw = load_from_path_with_fs(fs, path)?;
            ConfigFile::try_from(raw)
        }
        None => load_default(fs),
    }
}

/// Dry-run output: a header, then one `task level` line per task.
fn format_levels(topology: &Topology, levels: &LevelMap) -> String {
    let header = format!(
        "levels ({} orientation, max {}):\n",
        topology.orientation(),
        levels.max_level()
    );
    levels.iter().fold(header, |mut out, (task, level)| {
        out.push_str(&format!("  {task} {level}\n"));
        out
    })
}
