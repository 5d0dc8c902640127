//! Ingestion driver: window + evaluation chain
//!
//! ## Overview
//!
//! [`Monitor`] is the single integration point the sampling loop calls into.
//! Each [`Monitor::ingest`] pushes one sample into the sliding window and then
//! runs every evaluator over the updated window:
//!
//! ```text
//! Sample ─→ validate ─→ SlidingWindow::push ─→ EvaluationChain::evaluate_all ─→ StatisticsReport
//! ```
//!
//! The window is the only mutable state. Push and evaluation happen inside the
//! same `&mut self` call, so no reader can observe a pushed sample without
//! its report.
//!
//! ## Concurrency
//!
//! `Monitor` is `Send` but deliberately not shared: move it into the thread
//! that consumes samples and feed it through a single channel so samples are
//! processed strictly in arrival order.
//!
//! ```rust
//! use thermowatch_core::{Monitor, MonitorConfig, Sample};
//!
//! let mut monitor: Monitor = Monitor::new(MonitorConfig::default())?;
//!
//! let report = monitor.ingest(Sample::new(1_620_095_103, 25.0))?;
//! assert!(!report.breaches_threshold);
//!
//! let report = monitor.ingest(Sample::new(1_620_095_108, 36.5))?;
//! assert!(report.breaches_threshold);
//! assert!(report.high_volatility); // 36.5 - 25.0 > 10
//! # Ok::<(), thermowatch_core::EvaluationError>(())
//! ```

use crate::{
    buffer::SlidingWindow,
    config::MonitorConfig,
    constants::WINDOW_CAPACITY,
    errors::{EvaluationError, EvaluationResult},
    evaluators::EvaluationChain,
    report::StatisticsReport,
    traits::{Measurable, Sample},
};

/// Owns the sliding window and evaluates it on every sample
#[derive(Debug)]
pub struct Monitor<const N: usize = WINDOW_CAPACITY> {
    window: SlidingWindow<N>,
    chain: EvaluationChain,
    config: MonitorConfig,
}

impl<const N: usize> Monitor<N> {
    /// Monitor with the standard chain built from `config`
    pub fn new(config: MonitorConfig) -> EvaluationResult<Self> {
        config.validate()?;

        Ok(Self {
            window: SlidingWindow::new(),
            chain: EvaluationChain::standard(&config),
            config,
        })
    }

    /// Monitor with a caller-assembled chain
    ///
    /// `config` is validated and kept for reference only; the chain's
    /// evaluators carry their own parameters.
    pub fn with_chain(config: MonitorConfig, chain: EvaluationChain) -> EvaluationResult<Self> {
        config.validate()?;

        Ok(Self {
            window: SlidingWindow::new(),
            chain,
            config,
        })
    }

    /// Push `sample` and evaluate the resulting window
    ///
    /// A non-finite value is rejected before it touches the window, so one bad
    /// reading cannot poison the next twelve reports.
    pub fn ingest(&mut self, sample: Sample) -> EvaluationResult<StatisticsReport> {
        if !sample.is_valid() {
            log_warn!("rejecting non-finite sample at t={}", sample.timestamp);
            return Err(EvaluationError::InvalidValue);
        }

        if let Some(last) = self.window.last() {
            if sample.timestamp < last.timestamp {
                log_warn!(
                    "sample timestamp went backwards: {} after {}",
                    sample.timestamp,
                    last.timestamp
                );
            }
        }

        self.window.push(sample);
        let report = self.evaluate_all()?;

        log_debug!(
            "t={} value={:.2} window={}/{} mean={:.2} stddev={:.2}",
            sample.timestamp,
            sample.value,
            self.window.len(),
            N,
            report.mean,
            report.stddev
        );

        // Report values only; a custom chain need not match `self.config`
        if report.breaches_threshold {
            log_warn!("temperature {:.2} breaches threshold at t={}", sample.value, sample.timestamp);
        }

        if report.high_volatility {
            log_warn!(
                "volatility spike at t={}: window range {:.2}..{:.2}",
                sample.timestamp,
                report.min,
                report.max
            );
        }

        Ok(report)
    }

    /// Evaluate the current window without modifying it
    pub fn evaluate_all(&self) -> EvaluationResult<StatisticsReport> {
        let samples = self.window.snapshot();
        self.chain.evaluate_all(&samples)
    }

    /// Read-only access to the window
    pub fn window(&self) -> &SlidingWindow<N> {
        &self.window
    }

    /// Configuration the monitor was built with
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Evaluation chain run on every sample
    pub fn chain(&self) -> &EvaluationChain {
        &self.chain
    }
}

impl<const N: usize> Default for Monitor<N> {
    fn default() -> Self {
        let config = MonitorConfig::default();

        Self {
            window: SlidingWindow::new(),
            chain: EvaluationChain::standard(&config),
            config,
        }
    }
}
