//! Shared fixtures for integration tests
//!
//! Provides:
//! - Fixed reference series with hand-computed statistics
//! - A deterministic temperature series generator
//! - Helpers to feed values through a monitor

#![allow(dead_code)]

use thermowatch_core::{
    constants::SAMPLE_INTERVAL_SECS,
    time::{FixedClock, TimeSource, Timestamp},
    Monitor, Sample, StatisticsReport,
};

/// First timestamp of every generated series
pub const START: Timestamp = 1_620_095_103;

/// Reference series with known statistics
///
/// mean 20.875, population stddev sqrt(128.109375), quartiles 10.5 / 18.5 / 29.5,
/// tail-6 spread 34.
pub const REFERENCE: [f64; 8] = [33.0, 26.0, 42.0, 21.0, 16.0, 8.0, 10.0, 11.0];

/// Samples 5 s apart starting at [`START`]
pub fn samples(values: &[f64]) -> Vec<Sample> {
    let mut clock = FixedClock::new(START);
    values
        .iter()
        .map(|&value| {
            let sample = Sample::new(clock.now(), value);
            clock.advance(SAMPLE_INTERVAL_SECS);
            sample
        })
        .collect()
}

/// Ingest every value, returning each report
pub fn feed<const N: usize>(monitor: &mut Monitor<N>, values: &[f64]) -> Vec<StatisticsReport> {
    samples(values)
        .into_iter()
        .map(|sample| monitor.ingest(sample).expect("valid sample"))
        .collect()
}

/// Deterministic temperature series
///
/// Slow drift around `base` with small pseudo-random jitter, plus optional
/// excursions at chosen indices.
pub struct SeriesGenerator {
    seed: u32,
    base: f64,
    jitter: f64,
}

impl SeriesGenerator {
    pub fn new(base: f64, jitter: f64) -> Self {
        Self { seed: 42, base, jitter }
    }

    /// `len` readings with `(index, offset)` excursions added on top
    pub fn series(&mut self, len: usize, excursions: &[(usize, f64)]) -> Vec<f64> {
        (0..len)
            .map(|i| {
                let offset = excursions
                    .iter()
                    .filter(|(at, _)| *at == i)
                    .map(|(_, delta)| delta)
                    .sum::<f64>();
                self.base + self.noise() + offset
            })
            .collect()
    }

    fn noise(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = self.seed as f64 / u32::MAX as f64;
        (uniform - 0.5) * 2.0 * self.jitter
    }
}
