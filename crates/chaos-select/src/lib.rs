//! Chaos Select — selection algorithms driven by a chaos source.
//!
//! Responsible for in-place shuffling, weighted and unweighted choice, and
//! sampling among an enum's named constants. Every algorithm draws through
//! the integer generator of `chaos-core`, so results are reproducible for a
//! given seed.

pub mod named;
pub mod select;
pub mod shuffle;
pub mod weighted;

pub use named::NamedConstants;
pub use select::ChaosSelect;
pub use weighted::{Weighted, WeightedValue};
