//! Host-side runner for ThermoWatch
//!
//! Drives a [`thermowatch_core::Monitor`] from a synthetic sensor:
//!
//! - [`sensor`] - bounded random walk producing samples
//! - [`publisher`] - fans samples out to registered observers
//! - [`driver`] - periodic sampling loop and the monitor's consumer thread
//! - [`display`] - console rendering of reports
//! - [`config`] - JSON configuration
//!
//! ```no_run
//! use thermowatch_sim::{run_simulation, SimConfig, SimulatedPacer};
//!
//! let config = SimConfig { samples: Some(24), seed: Some(7), ..SimConfig::default() };
//! let ingested = run_simulation(&config, SimulatedPacer::starting_at(0), |report| {
//!     println!("{}", thermowatch_sim::format_report(report));
//! })?;
//! assert_eq!(ingested, 24);
//! # Ok::<(), thermowatch_sim::SimError>(())
//! ```

pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod publisher;
pub mod sensor;

pub use config::SimConfig;
pub use display::format_report;
pub use driver::{
    consume, run_simulation, spawn_consumer, Pacer, SamplingLoop, SimulatedPacer, WallClockPacer,
};
pub use error::{SimError, SimResult};
pub use publisher::{ChannelObserver, Observer, RecordingObserver, SensorPublisher};
pub use sensor::RandomWalkSensor;
