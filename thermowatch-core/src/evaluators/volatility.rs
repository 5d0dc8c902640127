//! Short-horizon volatility check
//!
//! Measures the max-min spread over a sub-window at the end of the sliding
//! window. The sub-window is counted in samples, not seconds, so it assumes a
//! constant sampling interval: six samples are thirty seconds at 5 s cadence.

use crate::{
    config::SubWindow,
    errors::{EvaluationError, EvaluationResult},
    stats::max_min,
    traits::{Evaluation, Evaluator, RequestTag, Sample},
};

use super::values_of;

/// Flags the window when the sub-window spread is strictly above `delta`
#[derive(Debug, Clone, Copy)]
pub struct VolatilityEvaluator {
    /// Spread limit in °C
    delta: f64,
    /// Samples inspected
    sub_window: SubWindow,
}

impl VolatilityEvaluator {
    /// Spike when the spread inside `sub_window` is strictly above `delta` (°C)
    pub fn new(delta: f64, sub_window: SubWindow) -> Self {
        Self { delta, sub_window }
    }

    /// Configured spread limit (°C)
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Slice of `window` this evaluator inspects
    pub fn sub_slice<'a>(&self, window: &'a [Sample]) -> &'a [Sample] {
        &window[self.sub_window.start(window.len())..]
    }

    /// Max-min spread over the sub-window
    pub fn spread(&self, window: &[Sample]) -> EvaluationResult<f64> {
        if window.is_empty() {
            return Err(EvaluationError::EmptyWindow);
        }

        let values = values_of(self.sub_slice(window));
        Ok(max_min(&values)?.spread())
    }
}

impl Evaluator for VolatilityEvaluator {
    fn tag(&self) -> RequestTag {
        RequestTag::VolatilitySpike
    }

    fn compute(&self, window: &[Sample]) -> EvaluationResult<Evaluation> {
        let spread = self.spread(window)?;
        Ok(Evaluation::VolatilitySpike(spread > self.delta))
    }
}
