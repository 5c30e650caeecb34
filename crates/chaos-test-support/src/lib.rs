//! Shared test doubles for the chaos engine.

mod entropy;
mod source;

pub use entropy::FixedEntropy;
pub use source::{MockSource, SequenceSource};
