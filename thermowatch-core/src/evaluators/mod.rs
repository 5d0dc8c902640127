//! Window Evaluators and the Chain that Dispatches to Them
//!
//! ## Overview
//!
//! Each evaluator derives one signal from the sliding window and answers to
//! exactly one [`RequestTag`]:
//!
//! | Evaluator               | Tag               | Looks at          | Result             |
//! |-------------------------|-------------------|-------------------|--------------------|
//! | [`StatisticsEvaluator`] | `Statistics`      | whole window      | [`Summary`](crate::stats::Summary) |
//! | [`ThresholdEvaluator`]  | `ThresholdBreach` | newest sample     | `bool`             |
//! | [`VolatilityEvaluator`] | `VolatilitySpike` | tail sub-window   | `bool`             |
//!
//! ## Dispatch
//!
//! Evaluators are linked into an [`EvaluationChain`]. A request walks the links
//! in order; a link whose tag does not match forwards it to the next one, and
//! a request nobody claims fails with
//! [`EvaluationError::UnknownRequestTag`](crate::EvaluationError::UnknownRequestTag).
//!
//! ```text
//! request ─→ Volatility ─→ Threshold ─→ Statistics ─→ "no handler"
//!              │              │              │
//!              ▼              ▼              ▼
//!            bool           bool          Summary
//! ```
//!
//! ## Why the Threshold Looks Only at the Newest Sample
//!
//! A breach is an instantaneous excursion. Averaging it away over the window
//! would hide exactly the reading an operator needs to see.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermowatch_core::evaluators::EvaluationChain;
//! use thermowatch_core::{MonitorConfig, RequestTag, Sample, Evaluation};
//!
//! let chain = EvaluationChain::standard(&MonitorConfig::default());
//! let window: Vec<Sample> = [33.0, 26.0, 42.0, 21.0, 16.0, 8.0, 10.0, 11.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| Sample::new(5 * i as i64, v))
//!     .collect();
//!
//! let spike = chain.dispatch(RequestTag::VolatilitySpike.into(), &window)?;
//! assert_eq!(spike, Evaluation::VolatilitySpike(true));
//! # Ok::<(), thermowatch_core::EvaluationError>(())
//! ```

mod chain;
mod statistics;
mod threshold;
mod volatility;

pub use chain::{EvaluationChain, EvaluationChainBuilder};
pub use statistics::StatisticsEvaluator;
pub use threshold::ThresholdEvaluator;
pub use volatility::VolatilityEvaluator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::traits::Sample;

/// Values of `window`, oldest first
fn values_of(window: &[Sample]) -> Vec<f64> {
    window.iter().map(|sample| sample.value).collect()
}
