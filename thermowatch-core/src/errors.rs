//! Error Types for Window Evaluation Failures
//!
//! ## Design
//!
//! Every error here is a local contract violation, not an expected runtime
//! condition. None of them is retried; they propagate to whoever called
//! [`Monitor::ingest`](crate::Monitor::ingest) so the bug surfaces instead of
//! producing a wrong number (an empty window never yields a silent `0.0`).
//!
//! Errors stay small and `Copy`: no `String`, only `&'static str` payloads, so
//! they can be returned from the hot path on targets without an allocator.
//!
//! ## Error Categories
//!
//! ### Caller Contract
//! - `EmptyWindow`: statistics requested before the first sample arrived
//! - `InvalidValue`: sample value is NaN or infinite
//!
//! ### Programming Errors
//! - `UnknownRequestTag`: the evaluation chain has no link for the request
//! - `InvalidQuartilePosition`: quartile position outside `{1, 2, 3}`
//! - `DuplicateHandler`: two chain links registered for the same tag
//!
//! ### Configuration
//! - `InvalidConfig`: a threshold, delta or sub-window length is unusable
//!
//! ```rust
//! use thermowatch_core::{EvaluationError, Monitor, Sample};
//!
//! let mut monitor: Monitor = Monitor::default();
//! match monitor.evaluate_all() {
//!     Err(EvaluationError::EmptyWindow) => {
//!         // Nothing ingested yet
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//!     Ok(_) => unreachable!(),
//! }
//!
//! let report = monitor.ingest(Sample::new(1_620_095_103, 25.0))?;
//! assert_eq!(report.max, 25.0);
//! # Ok::<(), EvaluationError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Evaluation errors - kept small so they can be returned by value
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvaluationError {
    /// Statistics requested over zero samples
    #[error("Empty window: no samples to evaluate")]
    EmptyWindow,

    /// Chain exhausted without a link handling the request
    #[error("No handler for request: {tag}")]
    UnknownRequestTag {
        /// Tag of the unhandled request
        tag: &'static str,
    },

    /// Quartile position outside {1, 2, 3}
    #[error("Invalid quartile position {position}, expected 1, 2 or 3")]
    InvalidQuartilePosition {
        /// Position that was requested
        position: u8,
    },

    /// Two chain links registered for the same request tag
    #[error("Duplicate handler for request: {tag}")]
    DuplicateHandler {
        /// Tag registered twice
        tag: &'static str,
    },

    /// Monitor configuration cannot be used
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: &'static str,
    },

    /// Sample value is NaN or infinite
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for EvaluationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyWindow =>
                defmt::write!(fmt, "Empty window"),
            Self::UnknownRequestTag { tag } =>
                defmt::write!(fmt, "No handler for {}", tag),
            Self::InvalidQuartilePosition { position } =>
                defmt::write!(fmt, "Invalid quartile {}", position),
            Self::DuplicateHandler { tag } =>
                defmt::write!(fmt, "Duplicate handler {}", tag),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
