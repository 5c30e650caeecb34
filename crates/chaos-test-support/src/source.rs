//! Scripted sample sources that count what they hand out.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chaos_core::source::SampleSource;

/// Repeats one raw sample and counts how many were taken.
///
/// The default sample is zero, which puts every ranged draw on its lower
/// bound. `taken()` lets a test assert that a shortcut or a failed
/// validation consumed nothing.
#[derive(Debug, Default)]
pub struct MockSource {
    sample: i32,
    taken: AtomicUsize,
}

impl MockSource {
    /// Create a source that returns `sample` forever.
    #[must_use]
    pub fn new(sample: i32) -> Self {
        Self {
            sample,
            taken: AtomicUsize::new(0),
        }
    }

    /// Number of samples drawn so far.
    #[must_use]
    pub fn taken(&self) -> usize {
        self.taken.load(Ordering::SeqCst)
    }
}

impl SampleSource for MockSource {
    fn next_sample(&self) -> i32 {
        self.taken.fetch_add(1, Ordering::SeqCst);
        self.sample
    }
}

/// Replays a fixed list of raw samples in order.
///
/// Build it from raw values with `new`, or from unit fractions with
/// `from_fractions` when the test reasons about where a draw lands in a
/// range. Drawing past the end of the list panics with the number of
/// samples already consumed.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<i32>,
    index: Mutex<usize>,
}

impl SequenceSource {
    /// Replays `values` exactly as given.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            index: Mutex::new(0),
        }
    }

    /// Create a source whose samples normalize to just above the given unit
    /// fractions, so `0.5` scales an exclusive range to its middle element.
    /// Fractions of 1.0 map to the largest sample the generator produces.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_fractions(fractions: &[f64]) -> Self {
        let max = f64::from(i32::MAX);
        let top = f64::from(i32::MAX - 1);
        Self::new(
            fractions
                .iter()
                .map(|f| (f.clamp(0.0, 1.0) * max).ceil().min(top) as i32)
                .collect(),
        )
    }

    /// Number of samples drawn so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn taken(&self) -> usize {
        *self.index.lock().unwrap()
    }
}

impl SampleSource for SequenceSource {
    fn next_sample(&self) -> i32 {
        let mut index = self.index.lock().unwrap();
        let value = *self
            .values
            .get(*index)
            .unwrap_or_else(|| panic!("SequenceSource exhausted after {} samples", *index));
        *index += 1;
        value
    }
}
