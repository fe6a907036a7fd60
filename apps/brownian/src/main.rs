//! brownian: command-line driver for the brownian_rs collision simulator.
//!
//! Runs a batch of independent trials of one model, logs the terminal-status
//! tally, prints descriptive statistics of the per-trial measures, and writes
//! every history plus one summary row per trial.
//!
//! # Usage
//!
//! ```bash
//! # 100 trials of the persistent square model (default)
//! brownian --model square --trials 100 --seed 42
//!
//! # Interacting model, 20 trials, per-trial debug logs, SQLite output
//! brownian --model interacting --trials 20 --log-level debug --sqlite
//!
//! # Full configuration from JSON; CLI flags still override the target
//! brownian --config trial.json --collisions 500 --output output/run1
//! ```
//!
//! A JSON configuration may omit any field; missing fields take the square
//! defaults:
//!
//! ```json
//! { "target_collisions": 100, "epsilon": 0.25,
//!   "model": { "kind": "disk", "time_interval": 0.1 } }
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use bm_core::TrialConfig;
use bm_output::{record_batch, CsvWriter};
use bm_sim::{run_batch, TrialStatus};
use bm_stats::{BatchStats, Summary};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Monte-Carlo simulation of a heavy particle among light particles.
#[derive(Parser, Debug)]
#[command(name = "brownian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model preset (ignored when --config is given)
    #[arg(short, long, value_enum, default_value = "square")]
    model: ModelArg,

    /// JSON trial configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of independent trials
    #[arg(short = 'n', long, default_value = "100")]
    trials: usize,

    /// Global seed; trial i uses a stream derived from (seed, i)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Override the target number of heavy-particle collisions
    #[arg(long)]
    collisions: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Write output.db instead of CSV files
    #[arg(long)]
    sqlite: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModelArg {
    Disk,
    DiskSubstep,
    Square,
    Interacting,
}

impl ModelArg {
    fn preset(self) -> TrialConfig {
        match self {
            ModelArg::Disk        => TrialConfig::disk(),
            ModelArg::DiskSubstep => TrialConfig::disk_substep(),
            ModelArg::Square      => TrialConfig::square(),
            ModelArg::Interacting => TrialConfig::interacting(),
        }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn parse_config(json: &str) -> Result<TrialConfig> {
    let config: TrialConfig = serde_json::from_str(json).context("invalid trial configuration")?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<TrialConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&json).with_context(|| format!("parsing {}", path.display()))
}

fn resolve_config(cli: &Cli) -> Result<TrialConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => cli.model.preset(),
    };
    if let Some(target) = cli.collisions {
        config.target_collisions = target;
    }
    config.validate()?;
    Ok(config)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("brownian v{}", env!("CARGO_PKG_VERSION"));

    if cli.sqlite && !cfg!(feature = "sqlite") {
        bail!("--sqlite requires building with the `sqlite` feature");
    }

    let config = resolve_config(&cli)?;
    info!(
        model = %config.model,
        target = config.target_collisions,
        particles = config.particle_count(),
        "configuration resolved"
    );

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    std::fs::write(cli.output.join("config.json"), serde_json::to_string_pretty(&config)?)?;

    // ── Run ───────────────────────────────────────────────────────────────
    let t0 = Instant::now();
    let report = run_batch(&config, cli.trials, cli.seed)?;
    let elapsed = t0.elapsed();
    info!("batch complete in {:.3} s", elapsed.as_secs_f64());

    // ── Write ─────────────────────────────────────────────────────────────
    if cli.sqlite {
        write_sqlite(&cli.output, &report)?;
    } else {
        let mut writer = CsvWriter::new(&cli.output)?;
        record_batch(&mut writer, &report)?;
    }
    info!(dir = %cli.output.display(), "output written");

    // ── Report ────────────────────────────────────────────────────────────
    println!();
    println!("{:<26} {:>8}", "Status", "Trials");
    println!("{}", "-".repeat(35));
    for status in TrialStatus::ALL {
        println!("{:<26} {:>8}", status.as_str(), report.counts.get(status));
    }
    if config.model.time_interval().is_some() {
        println!("{:<26} {:>8}", "no-collision ticks", report.no_collision_ticks);
    }

    let stats = BatchStats::from_outcomes(&report.outcomes);
    if stats.trials < report.outcomes.len() {
        warn!(
            skipped = report.outcomes.len() - stats.trials,
            "trials without any collision are left out of the statistics"
        );
    }
    println!();
    print_summary("collisions", stats.collisions);
    print_summary("frequency", stats.frequency);
    print_summary("mean distance", stats.mean_distance);
    print_summary("max distance", stats.max_distance);
    print_summary("mean free path", stats.mean_free_path);

    Ok(())
}

fn print_summary(name: &str, summary: Option<Summary>) {
    match summary {
        Some(s) => println!("{name:<16} {s}"),
        None => println!("{name:<16} -"),
    }
}

#[cfg(feature = "sqlite")]
fn write_sqlite(dir: &Path, report: &bm_sim::BatchReport) -> Result<()> {
    let mut writer = bm_output::SqliteWriter::new(dir)?;
    record_batch(&mut writer, report)?;
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
fn write_sqlite(_dir: &Path, _report: &bm_sim::BatchReport) -> Result<()> {
    bail!("--sqlite requires building with the `sqlite` feature")
}

#[cfg(test)]
mod tests {
    use bm_core::Model;

    use super::*;

    #[test]
    fn partial_json_falls_back_to_square_defaults() {
        let config = parse_config(r#"{ "target_collisions": 7 }"#).unwrap();
        assert_eq!(config, TrialConfig { target_collisions: 7, ..TrialConfig::square() });
    }

    #[test]
    fn tagged_model_parses() {
        let config = parse_config(
            r#"{ "model": { "kind": "interacting", "half_width": 0.3, "field_tolerance_scale": 2.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.model, Model::Interacting { half_width: 0.3, field_tolerance_scale: 2.0 });
    }

    #[test]
    fn unknown_model_kind_is_rejected() {
        assert!(parse_config(r#"{ "model": { "kind": "cube" } }"#).is_err());
    }

    #[test]
    fn collisions_flag_overrides_preset() {
        let cli = Cli::parse_from(["brownian", "--model", "disk-substep", "--collisions", "12"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.target_collisions, 12);
        assert!(matches!(config.model, Model::DiskSubstep { .. }));
    }
}
