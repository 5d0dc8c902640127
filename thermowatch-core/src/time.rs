//! Time sources for sample timestamps
//!
//! Samples carry wall-clock seconds since the Unix epoch. The core never reads
//! a clock itself; whoever produces samples picks a source:
//! - System clock (when std is available)
//! - Fixed clock (tests, replay, simulation)

/// Timestamp in seconds since the Unix epoch
pub type Timestamp = i64;

/// Source of time for sample producers
pub trait TimeSource {
    /// Current timestamp in seconds
    fn now(&self) -> Timestamp;

    /// Whether this source tracks real wall-clock time
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Manually driven time source
///
/// Does not move unless told to. The simulator advances it by the sampling
/// interval after every reading so replays are deterministic.
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `secs` seconds
    pub fn advance(&mut self, secs: u32) {
        self.timestamp = self.timestamp.saturating_add(secs as Timestamp);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
