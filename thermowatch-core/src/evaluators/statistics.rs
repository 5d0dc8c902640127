//! Descriptive statistics over the whole window

use crate::{
    errors::EvaluationResult,
    stats::Summary,
    traits::{Evaluation, Evaluator, RequestTag, Sample},
};

use super::values_of;

/// Runs mean/stddev, quartiles and max/min over every sample in the window
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEvaluator;

impl StatisticsEvaluator {
    /// Create the evaluator
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for StatisticsEvaluator {
    fn tag(&self) -> RequestTag {
        RequestTag::Statistics
    }

    fn compute(&self, window: &[Sample]) -> EvaluationResult<Evaluation> {
        let values = values_of(window);
        Summary::from_values(&values).map(Evaluation::Statistics)
    }
}
