//! Descriptive Statistics over Window Values
//!
//! ## Overview
//!
//! Three interchangeable strategies, each a pure function over a non-empty
//! slice of values in arrival order:
//!
//! | Strategy          | Output                          | Cost        |
//! |-------------------|---------------------------------|-------------|
//! | [`mean_and_stddev`] | mean, population std deviation | two passes  |
//! | [`quartiles`]     | q1, median, q3                  | sort a copy |
//! | [`max_min`]       | max, min                        | one pass    |
//!
//! Callers that pick the strategy at runtime go through [`StatKind`] and
//! [`compute`]. Every strategy rejects an empty slice with
//! [`EvaluationError::EmptyWindow`] instead of returning zeros.
//!
//! ## Population Variance
//!
//! The standard deviation divides by `n`, not `n - 1`: the window is the whole
//! population being described, not a sample of a larger one.
//!
//! ```text
//! mean   = Σx / n
//! stddev = sqrt( Σ(x - mean)² / n )
//! ```
//!
//! ## Quartile Positions
//!
//! Quartile `q` sits at the 1-based position `q·(n+1)/4` of the sorted data.
//! A whole position selects that element; a fractional one averages the two
//! neighbours around it:
//!
//! ```text
//! sorted = [8, 10, 11, 16, 21, 26, 33, 42]      n = 8
//!
//! q1: 1·9/4 = 2.25 → (10 + 11) / 2 = 10.5
//! q2: 2·9/4 = 4.50 → (16 + 21) / 2 = 18.5
//! q3: 3·9/4 = 6.75 → (26 + 33) / 2 = 29.5
//! ```
//!
//! Positions that fall outside the data clamp to the nearest end: position
//! `0.75` (q1 with two samples) takes the smallest value and a floor equal to
//! `n` (q3 with one or two samples) takes the largest. With a full window of
//! 12 samples this agrees with the averaged inverted CDF quantile method.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::{EvaluationError, EvaluationResult};

/// Mean and population standard deviation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub stddev: f64,
}

/// First quartile, median and third quartile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quartiles {
    /// Position 1
    pub q1: f64,
    /// Position 2
    pub median: f64,
    /// Position 3
    pub q3: f64,
}

/// Largest and smallest value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremes {
    /// Largest value
    pub max: f64,
    /// Smallest value
    pub min: f64,
}

impl Extremes {
    /// Difference between the extremes
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// All descriptive statistics for one window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub stddev: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest value
    pub max: f64,
    /// Smallest value
    pub min: f64,
}

impl Summary {
    /// Run every strategy over `values`
    pub fn from_values(values: &[f64]) -> EvaluationResult<Self> {
        let Moments { mean, stddev } = mean_and_stddev(values)?;
        let Quartiles { q1, median, q3 } = quartiles(values)?;
        let Extremes { max, min } = max_min(values)?;

        Ok(Self { mean, stddev, q1, median, q3, max, min })
    }
}

/// Strategy selector for [`compute`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// [`mean_and_stddev`]
    MeanStdDev,
    /// [`quartiles`]
    Quartiles,
    /// [`max_min`]
    MaxMin,
}

/// Output of one strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// Mean and standard deviation
    MeanStdDev(Moments),
    /// Quartiles
    Quartiles(Quartiles),
    /// Extremes
    MaxMin(Extremes),
}

/// Run the strategy selected by `kind`
pub fn compute(kind: StatKind, values: &[f64]) -> EvaluationResult<StatValue> {
    match kind {
        StatKind::MeanStdDev => mean_and_stddev(values).map(StatValue::MeanStdDev),
        StatKind::Quartiles => quartiles(values).map(StatValue::Quartiles),
        StatKind::MaxMin => max_min(values).map(StatValue::MaxMin),
    }
}

/// Mean and population standard deviation
pub fn mean_and_stddev(values: &[f64]) -> EvaluationResult<Moments> {
    if values.is_empty() {
        return Err(EvaluationError::EmptyWindow);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|x| {
            let deviation = x - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / n;

    Ok(Moments {
        mean,
        stddev: libm::sqrt(variance),
    })
}

/// Quartiles of unsorted `values`
pub fn quartiles(values: &[f64]) -> EvaluationResult<Quartiles> {
    if values.is_empty() {
        return Err(EvaluationError::EmptyWindow);
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    Ok(Quartiles {
        q1: quartile(&sorted, 1)?,
        median: quartile(&sorted, 2)?,
        q3: quartile(&sorted, 3)?,
    })
}

/// Quartile `position` (1, 2 or 3) of already sorted data
pub fn quartile(sorted: &[f64], position: u8) -> EvaluationResult<f64> {
    if !(1..=3).contains(&position) {
        return Err(EvaluationError::InvalidQuartilePosition { position });
    }

    let n = sorted.len();
    match n {
        0 => return Err(EvaluationError::EmptyWindow),
        1 => return Ok(sorted[0]),
        _ => {}
    }

    // position * (n + 1) / 4, kept in integers so "is whole" is exact
    let scaled = position as usize * (n + 1);
    let whole = scaled / 4;

    if scaled % 4 == 0 {
        return Ok(sorted[whole - 1]);
    }

    let value = match whole {
        0 => sorted[0],
        w if w >= n => sorted[n - 1],
        w => (sorted[w - 1] + sorted[w]) / 2.0,
    };

    Ok(value)
}

/// Largest and smallest value in a single pass
///
/// On ties the first value seen is kept.
pub fn max_min(values: &[f64]) -> EvaluationResult<Extremes> {
    let (&first, rest) = values.split_first().ok_or(EvaluationError::EmptyWindow)?;

    let extremes = rest.iter().fold(Extremes { max: first, min: first }, |acc, &x| Extremes {
        max: if x > acc.max { x } else { acc.max },
        min: if x < acc.min { x } else { acc.min },
    });

    Ok(extremes)
}
