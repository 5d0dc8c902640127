//! Time-Related Constants
//!
//! Sampling cadence and conversion factors. Timestamps in the core are whole
//! seconds since the Unix epoch.

// ===== TIME UNIT CONVERSIONS =====

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

// ===== SAMPLING INTERVALS =====

/// Interval between two temperature samples (seconds).
///
/// The volatility sub-window and the window capacity are both expressed in
/// samples and rely on this cadence staying constant.
pub const SAMPLE_INTERVAL_SECS: u32 = 5;
