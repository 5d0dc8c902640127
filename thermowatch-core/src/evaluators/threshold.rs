//! Fixed-threshold breach check on the newest sample

use crate::{
    errors::{EvaluationError, EvaluationResult},
    traits::{Evaluation, Evaluator, RequestTag, Sample},
};

/// Flags the window when its newest sample is strictly above `threshold`
#[derive(Debug, Clone, Copy)]
pub struct ThresholdEvaluator {
    /// Breach limit in °C
    threshold: f64,
}

impl ThresholdEvaluator {
    /// Breach when the newest value is strictly above `threshold` (°C)
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Configured threshold (°C)
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Evaluator for ThresholdEvaluator {
    fn tag(&self) -> RequestTag {
        RequestTag::ThresholdBreach
    }

    fn compute(&self, window: &[Sample]) -> EvaluationResult<Evaluation> {
        let latest = window.last().ok_or(EvaluationError::EmptyWindow)?;
        Ok(Evaluation::ThresholdBreach(latest.value > self.threshold))
    }
}
