//! Drone dispatch CLI.
//!
//! Reads a problem file, runs the greedy simulation, and writes the
//! committed commands. Ctrl-C stops the run early; whatever was committed
//! is still written.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use drone_dispatch::io::{read_problem, save_schedule};
use drone_dispatch::scheduler::ScheduleReport;
use drone_dispatch::simulation::{
    Simulation, SimulationConfig, SimulationOutcome, DEFAULT_PROGRESS_INTERVAL,
};
use drone_dispatch::validation::{unreachable_products, validate_problem};
use drone_dispatch::world::World;

#[derive(Parser)]
#[command(name = "drone-dispatch")]
#[command(version)]
#[command(about = "Greedy drone delivery scheduler")]
struct Cli {
    /// Problem file to read
    input: PathBuf,

    /// Schedule file to write
    output: PathBuf,

    /// Turns between progress log lines (0 disables)
    #[arg(long = "progress-every", default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: u32,

    /// Stop after this many turns even if the horizon is longer
    #[arg(long = "turn-limit")]
    turn_limit: Option<u32>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("failed to install interrupt handler")?;
    }

    run(cli, &interrupted)?;
    Ok(())
}

/// Loads, simulates, and writes the schedule (and the report, if asked).
///
/// The output file is written even when the run is interrupted.
fn run(cli: Cli, interrupted: &AtomicBool) -> Result<SimulationOutcome> {
    info!(input = %cli.input.display(), "running on file");
    let problem = read_problem(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    if let Err(errors) = validate_problem(&problem) {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
    }
    let heavy = unreachable_products(&problem);
    if !heavy.is_empty() {
        warn!(products = ?heavy, "product types heavier than the payload");
    }

    let mut config = SimulationConfig::new().with_progress_interval(cli.progress_every);
    if let Some(limit) = cli.turn_limit {
        config = config.with_turn_limit(limit);
    }

    let mut world = World::new(problem.clone());
    let outcome = Simulation::with_config(config).run(&mut world, interrupted);

    save_schedule(&cli.output, &world)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    let report = ScheduleReport::calculate(&problem, &world);
    info!(
        ?outcome,
        commands = report.command_count,
        delivered = report.units_delivered,
        completed = report.orders_completed,
        score = report.score,
        output = %cli.output.display(),
        "schedule written"
    );

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    Ok(outcome)
}
