//! Core evaluation engine for ThermoWatch
//!
//! Keeps the last minute of temperature samples and, on every new sample,
//! re-derives descriptive statistics, a threshold breach flag and a volatility
//! flag. Designed to run on the sensor node itself.
//!
//! Key constraints:
//! - Window storage is a fixed array; pushing never allocates
//! - Every operation is synchronous and finishes within the ingest call
//! - Contract violations are reported, never papered over with zeros
//!
//! ```no_run
//! use thermowatch_core::{Monitor, MonitorConfig, Sample};
//!
//! let mut monitor: Monitor = Monitor::new(MonitorConfig::default()).unwrap();
//!
//! // Called by the sampling loop every 5 seconds
//! match monitor.ingest(Sample::new(1_620_095_103, 25.0)) {
//!     Ok(report) if report.has_alert() => {}, // Notify operator
//!     Ok(_) => {},
//!     Err(e) => {}, // Caller bug - surface it
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod evaluators;
pub mod monitor;
pub mod report;
pub mod stats;
pub mod time;
pub mod traits;

// Public API
pub use buffer::SlidingWindow;
pub use config::{MonitorConfig, SubWindow};
pub use errors::{EvaluationError, EvaluationResult};
pub use evaluators::{
    EvaluationChain,
    StatisticsEvaluator,
    ThresholdEvaluator,
    VolatilityEvaluator,
};
pub use monitor::Monitor;
pub use report::StatisticsReport;
pub use stats::{StatKind, StatValue, Summary};
pub use time::{TimeSource, Timestamp};
pub use traits::{Evaluation, Evaluator, EvaluatorRequest, RequestTag, Sample};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
