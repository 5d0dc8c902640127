//! Ordered evaluation chain and its builder

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use heapless::Vec;

use crate::{
    config::MonitorConfig,
    errors::{EvaluationError, EvaluationResult},
    report::StatisticsReport,
    traits::{Evaluation, Evaluator, EvaluatorRequest, RequestTag, Sample},
};

use super::{StatisticsEvaluator, ThresholdEvaluator, VolatilityEvaluator};

/// Maximum number of links in a chain
pub const MAX_CHAIN_LINKS: usize = 8;

/// Boxed link, `Send` so a monitor can move to its consumer thread
type Link = Box<dyn Evaluator + Send>;

/// Ordered evaluators walked linearly by request tag
///
/// Each tag has at most one link; the builder refuses duplicates so dispatch
/// never depends on which of two handlers comes first.
pub struct EvaluationChain {
    links: Vec<Link, MAX_CHAIN_LINKS>,
}

impl EvaluationChain {
    /// Start an empty chain
    pub fn builder() -> EvaluationChainBuilder {
        EvaluationChainBuilder::new()
    }

    /// Volatility → Threshold → Statistics, parameterized by `config`
    pub fn standard(config: &MonitorConfig) -> Self {
        let mut links: Vec<Link, MAX_CHAIN_LINKS> = Vec::new();
        // Three distinct tags always fit
        let _ = links.push(Box::new(VolatilityEvaluator::new(
            config.volatility_delta,
            config.volatility_window,
        )));
        let _ = links.push(Box::new(ThresholdEvaluator::new(config.breach_threshold)));
        let _ = links.push(Box::new(StatisticsEvaluator::new()));

        Self { links }
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Tags in walk order
    pub fn tags(&self) -> impl Iterator<Item = RequestTag> + '_ {
        self.links.iter().map(|link| link.tag())
    }

    /// Hand `request` down the chain until a link claims it
    pub fn dispatch(
        &self,
        request: EvaluatorRequest,
        window: &[Sample],
    ) -> EvaluationResult<Evaluation> {
        for link in &self.links {
            if let Some(evaluation) = link.evaluate(&request, window)? {
                return Ok(evaluation);
            }
        }

        Err(EvaluationError::UnknownRequestTag {
            tag: request.tag.as_str(),
        })
    }

    /// Evaluate every tag over `window` and assemble the report
    ///
    /// Pure with respect to `window`: the same samples always give the same
    /// report.
    pub fn evaluate_all(&self, window: &[Sample]) -> EvaluationResult<StatisticsReport> {
        let latest = window.last().ok_or(EvaluationError::EmptyWindow)?;

        let summary = match self.dispatch(RequestTag::Statistics.into(), window)? {
            Evaluation::Statistics(summary) => summary,
            _ => return Err(mismatch(RequestTag::Statistics)),
        };
        let breaches_threshold = self.flag(RequestTag::ThresholdBreach, window)?;
        let high_volatility = self.flag(RequestTag::VolatilitySpike, window)?;

        Ok(StatisticsReport::new(
            latest.timestamp,
            summary,
            breaches_threshold,
            high_volatility,
        ))
    }

    fn flag(&self, tag: RequestTag, window: &[Sample]) -> EvaluationResult<bool> {
        let evaluation = self.dispatch(tag.into(), window)?;
        match evaluation.flag() {
            Some(flag) if evaluation.tag() == tag => Ok(flag),
            _ => Err(mismatch(tag)),
        }
    }
}

/// A link claimed `tag` but answered with another kind of result
fn mismatch(tag: RequestTag) -> EvaluationError {
    EvaluationError::UnknownRequestTag { tag: tag.as_str() }
}

impl core::fmt::Debug for EvaluationChain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.tags()).finish()
    }
}

/// Builder for custom chains
pub struct EvaluationChainBuilder {
    links: Vec<Link, MAX_CHAIN_LINKS>,
    error: Option<EvaluationError>,
}

impl EvaluationChainBuilder {
    /// Builder with no links
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            error: None,
        }
    }

    /// Append a link at the end of the chain
    ///
    /// The first problem (duplicate tag, chain full) is kept and reported by
    /// [`build`](Self::build).
    pub fn link<E>(mut self, evaluator: E) -> Self
    where
        E: Evaluator + Send + 'static,
    {
        if self.error.is_some() {
            return self;
        }

        let tag = evaluator.tag();
        if self.links.iter().any(|link| link.tag() == tag) {
            self.error = Some(EvaluationError::DuplicateHandler { tag: tag.as_str() });
        } else if self.links.push(Box::new(evaluator)).is_err() {
            self.error = Some(EvaluationError::InvalidConfig {
                reason: "too many evaluators in chain",
            });
        }

        self
    }

    /// Finish the chain, or report the first rejected link
    pub fn build(self) -> EvaluationResult<EvaluationChain> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(EvaluationChain { links: self.links }),
        }
    }
}

impl Default for EvaluationChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
