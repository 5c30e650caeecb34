//! Entropy abstraction for unseeded engines.

use uuid::Uuid;

/// Source of non-deterministic 32-bit values used when no seed is given.
pub trait Entropy: Send + Sync {
    /// Returns a fresh entropy value.
    fn next_entropy(&self) -> i32;
}

/// Production entropy that folds a random v4 UUID down to 32 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl Entropy for SystemEntropy {
    fn next_entropy(&self) -> i32 {
        fold_uuid(Uuid::new_v4())
    }
}

/// XORs the four 32-bit words of a UUID together.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn fold_uuid(id: Uuid) -> i32 {
    let bits = id.as_u128();
    let folded = (bits as u32) ^ ((bits >> 32) as u32) ^ ((bits >> 64) as u32) ^ ((bits >> 96) as u32);
    folded as i32
}
