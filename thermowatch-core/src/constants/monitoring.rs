//! Window Sizing and Alert Thresholds
//!
//! Defaults for the sliding window and the two alert evaluators. The window is
//! sized in samples, not seconds: every derived length assumes the constant
//! cadence in [`SAMPLE_INTERVAL_SECS`](super::time::SAMPLE_INTERVAL_SECS).

use super::time::{SAMPLE_INTERVAL_SECS, SECONDS_PER_MINUTE};

// ===== WINDOW =====

/// Number of samples retained by the sliding window.
///
/// One minute of history at the default 5 s cadence.
pub const WINDOW_CAPACITY: usize = (SECONDS_PER_MINUTE / SAMPLE_INTERVAL_SECS) as usize;

// ===== THRESHOLD BREACH =====

/// Temperature above which the latest sample counts as a breach (°C).
///
/// Strictly greater: a reading exactly at the threshold is not a breach.
pub const BREACH_THRESHOLD_C: f64 = 31.0;

/// Breach threshold of the older revision (°C).
pub const LEGACY_BREACH_THRESHOLD_C: f64 = 41.0;

// ===== VOLATILITY SPIKE =====

/// Max-min spread inside the volatility sub-window that raises an alert (°C).
pub const VOLATILITY_DELTA_C: f64 = 10.0;

/// Spread limit of the older revision (°C).
pub const LEGACY_VOLATILITY_DELTA_C: f64 = 2.5;

/// Samples at the tail of the window inspected for volatility.
///
/// Thirty seconds at the default cadence. Fewer samples are used while the
/// window is still filling.
pub const VOLATILITY_TAIL_LEN: usize = 30 / SAMPLE_INTERVAL_SECS as usize;

/// Leading samples dropped before measuring spread in the legacy preset.
///
/// With a full 12-sample window this leaves the newest five.
pub const LEGACY_VOLATILITY_SKIP_HEAD: usize = 7;
