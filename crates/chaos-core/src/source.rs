//! Raw sample abstraction.
//!
//! The engine is the production source. Tests inject scripted sources so the
//! derived generators can be checked against known samples.

/// Producer of raw subtractive samples.
pub trait SampleSource: Send + Sync {
    /// Returns one raw sample in `[0, i32::MAX)`.
    fn next_sample(&self) -> i32;
}

impl<S: SampleSource + ?Sized> SampleSource for std::sync::Arc<S> {
    fn next_sample(&self) -> i32 {
        (**self).next_sample()
    }
}
