//! Monitor configuration
//!
//! Two revisions of the monitor disagree on the alert parameters (threshold
//! 31 vs 41 °C, delta 10 vs 2.5 °C, tail vs head-drop sub-window), so none of
//! them is hardwired. [`MonitorConfig::default`] is the current revision.
//! [`MonitorConfig::legacy`] is the older revision's constants read as a
//! head-drop spread check; it does not replay that revision's behaviour, which
//! compared consecutive jumps across the whole window.

use crate::constants::{
    BREACH_THRESHOLD_C, LEGACY_BREACH_THRESHOLD_C, LEGACY_VOLATILITY_DELTA_C,
    LEGACY_VOLATILITY_SKIP_HEAD, VOLATILITY_DELTA_C, VOLATILITY_TAIL_LEN,
};
use crate::errors::{EvaluationError, EvaluationResult};

/// Part of the window the volatility evaluator inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubWindow {
    /// Last `min(len, n)` samples
    Tail(usize),
    /// Everything after the first `count` samples
    ///
    /// Falls back to the newest sample when the window holds `count` or fewer.
    SkipHead(usize),
}

impl SubWindow {
    /// Start index of the sub-window inside a window of `len` samples
    ///
    /// Never past the last sample of a non-empty window, so the resulting
    /// slice is empty only when the window is.
    pub fn start(&self, len: usize) -> usize {
        match *self {
            SubWindow::Tail(tail) => len - tail.min(len),
            SubWindow::SkipHead(count) => count.min(len.saturating_sub(1)),
        }
    }
}

impl Default for SubWindow {
    fn default() -> Self {
        SubWindow::Tail(VOLATILITY_TAIL_LEN)
    }
}

/// Alert parameters for the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Latest value strictly above this is a breach (°C)
    pub breach_threshold: f64,

    /// Sub-window spread strictly above this is a volatility spike (°C)
    pub volatility_delta: f64,

    /// Which samples the volatility check looks at
    pub volatility_window: SubWindow,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            breach_threshold: BREACH_THRESHOLD_C,
            volatility_delta: VOLATILITY_DELTA_C,
            volatility_window: SubWindow::default(),
        }
    }
}

impl MonitorConfig {
    /// Older revision's constants, with volatility as the spread after dropping
    /// the first seven samples
    pub fn legacy() -> Self {
        Self {
            breach_threshold: LEGACY_BREACH_THRESHOLD_C,
            volatility_delta: LEGACY_VOLATILITY_DELTA_C,
            volatility_window: SubWindow::SkipHead(LEGACY_VOLATILITY_SKIP_HEAD),
        }
    }

    /// Replace the breach threshold (°C)
    pub fn with_breach_threshold(mut self, threshold: f64) -> Self {
        self.breach_threshold = threshold;
        self
    }

    /// Replace the volatility delta (°C)
    pub fn with_volatility_delta(mut self, delta: f64) -> Self {
        self.volatility_delta = delta;
        self
    }

    /// Replace the sub-window the volatility check inspects
    pub fn with_volatility_window(mut self, window: SubWindow) -> Self {
        self.volatility_window = window;
        self
    }

    /// Reject parameters no evaluator can work with
    pub fn validate(&self) -> EvaluationResult<()> {
        if !self.breach_threshold.is_finite() {
            return Err(EvaluationError::InvalidConfig {
                reason: "breach threshold must be finite",
            });
        }

        if !self.volatility_delta.is_finite() || self.volatility_delta < 0.0 {
            return Err(EvaluationError::InvalidConfig {
                reason: "volatility delta must be finite and non-negative",
            });
        }

        if self.volatility_window == SubWindow::Tail(0) {
            return Err(EvaluationError::InvalidConfig {
                reason: "volatility tail must hold at least one sample",
            });
        }

        Ok(())
    }
}
