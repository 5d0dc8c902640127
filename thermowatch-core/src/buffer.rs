//! Fixed-Capacity Sliding Window of Temperature Samples
//!
//! ## Overview
//!
//! The monitor keeps the most recent `N` samples and recomputes everything from
//! them on each tick. Storage is a ring over a fixed array sized at compile time
//! through const generics, so pushing never allocates and never fails:
//!
//! - O(1) insertion (overwrites the oldest sample when full)
//! - O(1) access to the most recent sample
//! - O(n) ordered iteration, oldest first
//!
//! ### Eviction Order
//!
//! Strict FIFO. When the window is full the oldest sample is dropped before the
//! new one is appended; nothing is ever reordered.
//!
//! ```text
//! SlidingWindow<5> after 7 pushes (s0..s6):
//! ┌────┬────┬────┬────┬────┐
//! │ s5 │ s6 │ s2 │ s3 │ s4 │  ← physical slots
//! └────┴────┴────┴────┴────┘
//!             ↑
//!             write_pos = 2 (also the oldest slot)
//!
//! Logical view: [s2, s3, s4, s5, s6]
//! ```
//!
//! ### Views
//!
//! Evaluators work on contiguous slices. [`SlidingWindow::snapshot`] copies the
//! samples into a stack-allocated `heapless::Vec` in arrival order; with the
//! default capacity of 12 that is under 200 bytes.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermowatch_core::buffer::SlidingWindow;
//! use thermowatch_core::Sample;
//!
//! let mut window: SlidingWindow<3> = SlidingWindow::new();
//! for (i, value) in [21.0, 22.5, 23.0, 24.5].into_iter().enumerate() {
//!     window.push(Sample::new(1_000 + 5 * i as i64, value));
//! }
//!
//! // The first sample was evicted
//! assert_eq!(window.values().as_slice(), &[22.5, 23.0, 24.5]);
//! assert_eq!(window.last().map(|s| s.timestamp), Some(1_015));
//! ```

use heapless::Vec;

use crate::constants::WINDOW_CAPACITY;
use crate::traits::Sample;

/// Fixed-capacity FIFO window of timestamped samples
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - once full, the oldest sample sits at `write_pos`
///
/// ## Thread Safety
///
/// Not synchronized. The window has a single writer (the monitor); concurrent
/// producers must funnel samples through one consumer.
#[derive(Debug, Clone)]
pub struct SlidingWindow<const N: usize = WINDOW_CAPACITY> {
    /// Slots, `None` until first written
    data: [Option<Sample>; N],

    /// Index where the next write lands
    write_pos: usize,

    /// Number of valid samples
    len: usize,
}

impl<const N: usize> SlidingWindow<N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "window capacity must be non-zero");

    /// Creates an empty window
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;

        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Appends a sample, evicting the oldest one when full
    ///
    /// ```rust
    /// # use thermowatch_core::buffer::SlidingWindow;
    /// # use thermowatch_core::Sample;
    /// let mut window = SlidingWindow::<2>::new();
    /// window.push(Sample::new(0, 1.0));
    /// window.push(Sample::new(5, 2.0));
    /// window.push(Sample::new(10, 3.0));
    ///
    /// assert_eq!(window.values().as_slice(), &[2.0, 3.0]);
    /// ```
    pub fn push(&mut self, sample: Sample) {
        self.data[self.write_pos] = Some(sample);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no sample has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next push will evict
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of samples retained
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&Sample> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        self.data[idx].as_ref()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> SlidingWindowIter<'_, N> {
        SlidingWindowIter {
            window: self,
            index: 0,
        }
    }

    /// Ordered copy of the stored samples, oldest first
    ///
    /// Leaves the window untouched; calling it twice without a push in between
    /// returns equal snapshots.
    pub fn snapshot(&self) -> Vec<Sample, N> {
        self.iter().copied().collect()
    }

    /// Sample values in arrival order
    pub fn values(&self) -> Vec<f64, N> {
        self.iter().map(|sample| sample.value).collect()
    }

    /// Drop every sample
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }

    /// Sample at logical `index` (0 = oldest)
    ///
    /// Before the window fills, logical and physical indices match. Afterwards
    /// the oldest sample sits at `write_pos`, so the index is offset by it.
    fn get(&self, index: usize) -> Option<&Sample> {
        if index >= self.len {
            return None;
        }

        let physical = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[physical].as_ref()
    }
}

/// Iterator over window contents, oldest first
pub struct SlidingWindowIter<'a, const N: usize> {
    window: &'a SlidingWindow<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for SlidingWindowIter<'a, N> {
    type Item = &'a Sample;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.window.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for SlidingWindowIter<'_, N> {}

impl<const N: usize> Default for SlidingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(i: usize) -> Sample {
        Sample::new(1_620_095_103 + 5 * i as i64, i as f64)
    }

    #[test]
    fn empty_window() {
        let window: SlidingWindow = SlidingWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.capacity(), 12);
        assert!(window.last().is_none());
        assert!(window.snapshot().is_empty());
    }

    #[test]
    fn push_and_retrieve() {
        let mut window = SlidingWindow::<5>::new();
        window.push(Sample::new(1000, 25.0));

        assert_eq!(window.len(), 1);
        let last = window.last().unwrap();
        assert_eq!(last.value, 25.0);
        assert_eq!(last.timestamp, 1000);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut window = SlidingWindow::<3>::new();
        for i in 0..5 {
            window.push(sample(i));
        }

        assert_eq!(window.len(), 3);
        assert!(window.is_full());
        assert_eq!(window.values().as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(window.last().unwrap().value, 4.0);
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let mut window = SlidingWindow::<4>::new();
        for i in 0..6 {
            window.push(sample(i));
        }

        let first = window.snapshot();
        let second = window.snapshot();
        assert_eq!(first, second);
        assert_eq!(window.len(), 4);

        let timestamps: std::vec::Vec<i64> = first.iter().map(|s| s.timestamp).collect();
        assert!(timestamps.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn clear_resets() {
        let mut window = SlidingWindow::<3>::new();
        for i in 0..4 {
            window.push(sample(i));
        }
        window.clear();

        assert!(window.is_empty());
        assert!(window.last().is_none());

        window.push(sample(9));
        assert_eq!(window.values().as_slice(), &[9.0]);
    }

    proptest! {
        #[test]
        fn retains_last_capacity_samples(values in prop::collection::vec(-50.0f64..80.0, 1..40)) {
            let mut window = SlidingWindow::<12>::new();
            for (i, value) in values.iter().enumerate() {
                window.push(Sample::new(i as i64, *value));
            }

            let keep = values.len().min(12);
            let expected = &values[values.len() - keep..];
            prop_assert_eq!(window.len(), keep);
            let retained = window.values();
            prop_assert_eq!(retained.as_slice(), expected);
            prop_assert_eq!(window.iter().len(), keep);
        }
    }
}
