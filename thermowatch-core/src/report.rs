//! Per-sample evaluation report
//!
//! A report is built fresh for every ingested sample and never mutated. It
//! carries raw numbers only; rendering the timestamp as a local date-time is
//! left to the display layer.

use crate::stats::Summary;
use crate::time::Timestamp;

/// Everything derived from the window after one sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsReport {
    /// Timestamp of the newest sample in the window
    pub timestamp: Timestamp,
    /// Mean of the window
    pub mean: f64,
    /// Population standard deviation
    pub stddev: f64,
    /// First quartile
    pub q1: f64,
    /// Second quartile
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest value in the window
    pub max: f64,
    /// Smallest value in the window
    pub min: f64,
    /// Newest sample strictly above the breach threshold
    pub breaches_threshold: bool,
    /// Tail sub-window spread strictly above the volatility delta
    pub high_volatility: bool,
}

impl StatisticsReport {
    /// Report for the window ending at `timestamp`
    pub fn new(
        timestamp: Timestamp,
        summary: Summary,
        breaches_threshold: bool,
        high_volatility: bool,
    ) -> Self {
        let Summary { mean, stddev, q1, median, q3, max, min } = summary;

        Self {
            timestamp,
            mean,
            stddev,
            q1,
            median,
            q3,
            max,
            min,
            breaches_threshold,
            high_volatility,
        }
    }

    /// The descriptive statistics without the alert flags
    pub fn summary(&self) -> Summary {
        Summary {
            mean: self.mean,
            stddev: self.stddev,
            q1: self.q1,
            median: self.median,
            q3: self.q3,
            max: self.max,
            min: self.min,
        }
    }

    /// Whether either alert fired
    pub fn has_alert(&self) -> bool {
        self.breaches_threshold || self.high_volatility
    }
}
