//! Constants for ThermoWatch Core
//!
//! Every default the monitor uses lives here, documented with where it comes
//! from. Runtime code reads them through [`MonitorConfig`](crate::MonitorConfig)
//! so deployments can override the alert parameters without touching the core.
//!
//! ## Organization
//!
//! - **Monitoring**: window sizing and alert thresholds
//! - **Time**: sampling cadence and unit conversions

/// Window sizing and alert thresholds.
pub mod monitoring;

/// Sampling cadence and time unit conversions.
pub mod time;

// Re-export commonly used constants for convenience
pub use monitoring::{
    WINDOW_CAPACITY, BREACH_THRESHOLD_C, VOLATILITY_DELTA_C, VOLATILITY_TAIL_LEN,
    LEGACY_BREACH_THRESHOLD_C, LEGACY_VOLATILITY_DELTA_C, LEGACY_VOLATILITY_SKIP_HEAD,
};

pub use time::{SAMPLE_INTERVAL_SECS, SECONDS_PER_MINUTE};
