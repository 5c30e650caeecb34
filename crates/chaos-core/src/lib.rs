//! Chaos Core — seedable subtractive pseudorandom engine.
//!
//! This crate owns the generator state, the seeding algorithm, the raw
//! sample routine and every typed generator derived from it. Selection
//! algorithms live in `chaos-select`.

pub mod draws;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod generators;
pub mod range;
pub mod seed;
pub mod shared;
pub mod source;
pub mod state;

pub use draws::Draws;
pub use engine::ChaosEngine;
pub use entropy::{Entropy, SystemEntropy};
pub use error::ChaosError;
pub use generators::{Chaos, IntRange};
pub use seed::Seed;
pub use shared::{set_shared, shared};
pub use source::SampleSource;
