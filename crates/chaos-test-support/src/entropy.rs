//! Entropy pinned to a single value, for reproducible "unseeded" engines.

use chaos_core::entropy::Entropy;

/// Hands out the wrapped value on every request.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub i32);

impl Entropy for FixedEntropy {
    fn next_entropy(&self) -> i32 {
        self.0
    }
}
