//! mon - simulate workstation presence.
//!
//! Moves the cursor (and optionally types random characters) for the given
//! durations, alternating with idle pauses.

use anyhow::{Context, Result};
use clap::Parser;
use mon::{
    ActivitySimulator, Config, DryRunDevice, EnigoDevice, InputDevice, Schedule, Settings,
    SystemClock,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Simulate presence by jiggling the cursor and typing random characters.
///
/// Durations alternate between active and idle phases, starting with active.
#[derive(Parser, Debug)]
#[command(name = "mon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Durations in minutes for active and idle phases. Example: "30 10 20".
    #[arg(required = true, num_args = 1..)]
    durations: Vec<u64>,

    /// Type random Base64 characters during active phases.
    #[arg(short, long)]
    keystroke: bool,

    /// Path to config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable dry-run mode (log actions without injecting input).
    #[arg(long)]
    dry_run: bool,

    /// Seed for the random source, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Merge command line flags over the loaded config.
    ///
    /// Flags can only switch modes on; `--seed` replaces any configured seed.
    fn apply_to(&self, config: &mut Config) {
        if self.dry_run {
            config.dry_run = true;
        }
        if self.keystroke {
            config.keystrokes = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("mon v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config =
        Config::load_or_default(args.config.as_deref()).context("Failed to load configuration")?;

    args.apply_to(&mut config);

    debug!("Configuration: {:?}", config);

    let schedule = Schedule::from_minutes(&args.durations);
    info!(
        "Running {} phases, nominal {:?} (keystrokes={}, dry_run={})",
        schedule.len(),
        schedule.nominal_length(),
        config.keystrokes,
        config.dry_run
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let device: Box<dyn InputDevice> = if config.dry_run {
        Box::new(DryRunDevice::default())
    } else {
        Box::new(EnigoDevice::connect().context("Failed to initialize input backend")?)
    };

    let settings = Settings::from_config(&config);
    let mut simulator = ActivitySimulator::new(device, SystemClock, rng, settings);
    let summary = simulator.run(&schedule)?;

    info!(
        "Completed {} phases in {:?} ({} moves, {} keystrokes)",
        summary.phases.len(),
        summary.elapsed(),
        summary.total_moves(),
        summary.total_keystrokes()
    );

    Ok(())
}

/// Initialize logging with the specified level.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(format!("mon={level}"))
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
