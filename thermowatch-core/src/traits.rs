//! Core types and traits for evaluators
//!
//! These define the interface every link of the evaluation chain implements.
//! Keep them simple - pushing a sample never allocates, but evaluation boxes
//! chain links and copies window values, so targets need an allocator.

use core::fmt;
use core::str::FromStr;

use crate::errors::{EvaluationError, EvaluationResult};
use crate::stats::Summary;
use crate::time::Timestamp;

/// Single temperature reading with timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Seconds since the Unix epoch
    pub timestamp: Timestamp,
    /// Temperature in °C
    pub value: f64,
}

impl Sample {
    /// Create a sample
    pub const fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(Timestamp, f64)> for Sample {
    fn from((timestamp, value): (Timestamp, f64)) -> Self {
        Self::new(timestamp, value)
    }
}

/// Which evaluator a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestTag {
    /// Descriptive statistics over the whole window
    Statistics,
    /// Latest sample above the fixed threshold
    ThresholdBreach,
    /// Spread inside the tail sub-window above the fixed delta
    VolatilitySpike,
}

impl RequestTag {
    /// Every tag, in the order the monitor evaluates them
    pub const ALL: [RequestTag; 3] = [
        RequestTag::Statistics,
        RequestTag::ThresholdBreach,
        RequestTag::VolatilitySpike,
    ];

    /// Wire name of the tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            RequestTag::Statistics => "Statistics",
            RequestTag::ThresholdBreach => "ThresholdBreach",
            RequestTag::VolatilitySpike => "VolatilitySpike",
        }
    }
}

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire names returned by [`RequestTag::as_str`]
///
/// The error can only carry a `'static` tag, so any unknown input is reported
/// as `"unrecognized"`; the rejected string itself goes to the warning log.
impl FromStr for RequestTag {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| {
                log_warn!("unknown request tag {:?}", s);
                EvaluationError::UnknownRequestTag { tag: "unrecognized" }
            })
    }
}

/// Request handed to the evaluation chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorRequest {
    /// Evaluator the request is addressed to
    pub tag: RequestTag,
}

impl EvaluatorRequest {
    /// Request addressed to `tag`
    pub const fn new(tag: RequestTag) -> Self {
        Self { tag }
    }
}

impl From<RequestTag> for EvaluatorRequest {
    fn from(tag: RequestTag) -> Self {
        Self::new(tag)
    }
}

/// Typed result produced by one evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// Output of the statistics evaluator
    Statistics(Summary),
    /// Whether the latest sample breaches the threshold
    ThresholdBreach(bool),
    /// Whether the tail sub-window is volatile
    VolatilitySpike(bool),
}

impl Evaluation {
    /// Tag of the evaluator that produced this result
    pub fn tag(&self) -> RequestTag {
        match self {
            Evaluation::Statistics(_) => RequestTag::Statistics,
            Evaluation::ThresholdBreach(_) => RequestTag::ThresholdBreach,
            Evaluation::VolatilitySpike(_) => RequestTag::VolatilitySpike,
        }
    }

    /// Boolean outcome for the alert evaluators
    pub fn flag(&self) -> Option<bool> {
        match self {
            Evaluation::Statistics(_) => None,
            Evaluation::ThresholdBreach(flag) | Evaluation::VolatilitySpike(flag) => Some(*flag),
        }
    }
}

/// One link of the evaluation chain - implement this for each derived signal
pub trait Evaluator {
    /// Tag this evaluator answers to
    fn tag(&self) -> RequestTag;

    /// Compute the signal over `window` (oldest sample first)
    ///
    /// Only called for requests carrying this evaluator's tag.
    fn compute(&self, window: &[Sample]) -> EvaluationResult<Evaluation>;

    /// Handle `request` if it is addressed to this evaluator
    ///
    /// Returns `Ok(None)` when the tag does not match so the chain can forward
    /// the request to the next link.
    fn evaluate(
        &self,
        request: &EvaluatorRequest,
        window: &[Sample],
    ) -> EvaluationResult<Option<Evaluation>> {
        if request.tag != self.tag() {
            return Ok(None);
        }

        self.compute(window).map(Some)
    }
}

/// Values that can be fed to the statistics
pub trait Measurable {
    /// Whether the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Measurable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Measurable for Sample {
    fn is_valid(&self) -> bool {
        self.value.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_from_wire_names() {
        for tag in RequestTag::ALL {
            assert_eq!(tag.as_str().parse::<RequestTag>(), Ok(tag));
        }

        assert_eq!(
            "Humidity".parse::<RequestTag>(),
            Err(EvaluationError::UnknownRequestTag { tag: "unrecognized" })
        );
        // Wire names are case sensitive
        assert!("statistics".parse::<RequestTag>().is_err());
    }

    #[test]
    fn sample_from_tuple() {
        let sample = Sample::from((1_620_095_103, 25.0));
        assert_eq!(sample, Sample::new(1_620_095_103, 25.0));
    }

    #[test]
    fn non_finite_samples_are_invalid() {
        assert!(Sample::new(0, 21.5).is_valid());
        assert!(!Sample::new(0, f64::NAN).is_valid());
        assert!(!f64::INFINITY.is_valid());
    }

    #[test]
    fn alert_evaluations_expose_flag() {
        assert_eq!(Evaluation::ThresholdBreach(true).flag(), Some(true));
        assert_eq!(Evaluation::VolatilitySpike(false).tag(), RequestTag::VolatilitySpike);
    }
}
