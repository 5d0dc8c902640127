//! Simulation configuration
//!
//! Loaded from a JSON file, every field optional:
//!
//! ```json
//! {
//!   "monitor": { "breach_threshold": 31.0, "volatility_delta": 10.0,
//!                "volatility_window": { "tail": 6 } },
//!   "interval_secs": 5,
//!   "initial_temp": 25.0,
//!   "max_step": 1.5,
//!   "seed": 7,
//!   "samples": 120
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thermowatch_core::constants::SAMPLE_INTERVAL_SECS;
use thermowatch_core::MonitorConfig;

use crate::error::{SimError, SimResult};

/// Lowest temperature the synthetic sensor reports (°C)
pub const SENSOR_MIN_C: f64 = -20.0;

/// Highest temperature the synthetic sensor reports (°C)
pub const SENSOR_MAX_C: f64 = 60.0;

/// Largest change between consecutive readings: the full sensor range (°C)
pub const MAX_STEP_C: f64 = SENSOR_MAX_C - SENSOR_MIN_C;

/// Everything needed to run the sampling loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Alert parameters handed to the monitor
    pub monitor: MonitorConfig,

    /// Seconds between two samples
    pub interval_secs: u32,

    /// First reading of the random walk (°C)
    pub initial_temp: f64,

    /// Largest change between consecutive readings (°C)
    pub max_step: f64,

    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,

    /// Stop after this many samples, run forever when unset
    pub samples: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            interval_secs: SAMPLE_INTERVAL_SECS,
            initial_temp: 25.0,
            max_step: 2.0,
            seed: None,
            samples: None,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file
    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the loop or the monitor cannot run with
    pub fn validate(&self) -> SimResult<()> {
        self.monitor.validate()?;

        if self.interval_secs == 0 {
            return Err(SimError::InvalidConfig("interval must be at least one second"));
        }

        if !(0.0..=MAX_STEP_C).contains(&self.max_step) {
            return Err(SimError::InvalidConfig("max step must be between zero and the sensor range"));
        }

        if !(SENSOR_MIN_C..=SENSOR_MAX_C).contains(&self.initial_temp) {
            return Err(SimError::InvalidConfig("initial temperature outside sensor range"));
        }

        Ok(())
    }
}
