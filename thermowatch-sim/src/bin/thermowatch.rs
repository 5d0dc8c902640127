//! ThermoWatch - temperature window monitor
//!
//! Samples a synthetic sensor every few seconds, keeps the last minute of
//! readings and prints statistics plus threshold/volatility alerts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use thermowatch_core::time::{SystemClock, TimeSource};
use thermowatch_core::MonitorConfig;
use thermowatch_sim::{format_report, run_simulation, SimConfig, SimulatedPacer, WallClockPacer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ThermoWatch CLI
#[derive(Parser)]
#[command(name = "thermowatch")]
#[command(about = "ThermoWatch - sliding-window temperature monitor", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, env = "THERMOWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Breach threshold in °C
    #[arg(long)]
    threshold: Option<f64>,

    /// Volatility delta in °C
    #[arg(long)]
    delta: Option<f64>,

    /// Seconds between samples
    #[arg(long)]
    interval_secs: Option<u32>,

    /// Stop after this many samples
    #[arg(short = 'n', long)]
    samples: Option<u64>,

    /// Seed for the synthetic sensor
    #[arg(long)]
    seed: Option<u64>,

    /// Use the older alert parameters (41 °C, 2.5 °C, skip seven)
    #[arg(long)]
    legacy: bool,

    /// Advance a simulated clock instead of sleeping
    #[arg(long)]
    simulated: bool,

    /// Log level
    #[arg(long, env = "THERMOWATCH_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimConfig::default(),
        };

        // CLI flags override the file
        if self.legacy {
            config.monitor = MonitorConfig::legacy();
        }
        if let Some(threshold) = self.threshold {
            config.monitor = config.monitor.with_breach_threshold(threshold);
        }
        if let Some(delta) = self.delta {
            config.monitor = config.monitor.with_volatility_delta(delta);
        }
        if let Some(interval) = self.interval_secs {
            config.interval_secs = interval;
        }
        if self.samples.is_some() {
            config.samples = self.samples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; also picks up `log` records from the core
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let simulated = cli.simulated;
    let config = cli.into_config()?;

    log::info!(
        "threshold={:.2} delta={:.2} window={:?} interval={}s",
        config.monitor.breach_threshold,
        config.monitor.volatility_delta,
        config.monitor.volatility_window,
        config.interval_secs
    );

    let print = |report: &thermowatch_core::StatisticsReport| println!("{}\n", format_report(report));

    let ingested = if simulated {
        let start = SystemClock.now();
        run_simulation(&config, SimulatedPacer::starting_at(start), print)?
    } else {
        run_simulation(&config, WallClockPacer::default(), print)?
    };

    log::info!("processed {ingested} samples");
    Ok(())
}
