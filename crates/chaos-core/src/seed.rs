//! Seed resolution.
//!
//! Turns an optional seed (absent, integer or text) into the integer that
//! drives state initialization plus the label reported back to callers.

use sha2::{Digest, Sha256};

use crate::entropy::Entropy;

/// A seed as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Seed {
    /// Draw a fresh value from the entropy source.
    #[default]
    Entropy,
    /// Use the integer as-is.
    Number(i32),
    /// Parse as an integer when possible, otherwise hash.
    Text(String),
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Entropy, Into::into)
    }
}

/// Canonical `(value, label)` pair for a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSeed {
    /// Integer fed to the state initializer.
    pub value: i32,
    /// Label reported by the engine and accepted back by `reseed_with`.
    pub label: String,
    /// Whether the value came from the entropy source.
    pub from_entropy: bool,
}

impl ResolvedSeed {
    fn numeric(value: i32, from_entropy: bool) -> Self {
        Self {
            value,
            label: value.to_string(),
            from_entropy,
        }
    }
}

/// Resolves `seed` into its canonical form. Never fails.
#[must_use]
pub fn resolve(seed: &Seed, entropy: &dyn Entropy) -> ResolvedSeed {
    match seed {
        Seed::Number(value) => ResolvedSeed::numeric(*value, false),
        Seed::Text(text) if text.is_empty() => {
            ResolvedSeed::numeric(entropy.next_entropy(), true)
        }
        Seed::Text(text) => ResolvedSeed {
            value: text.trim().parse().unwrap_or_else(|_| hash_text(text)),
            label: text.clone(),
            from_entropy: false,
        },
        Seed::Entropy => ResolvedSeed::numeric(entropy.next_entropy(), true),
    }
}

/// Stable 32-bit hash of a text seed: the leading four bytes of its SHA-256
/// digest, big-endian.
#[must_use]
pub fn hash_text(text: &str) -> i32 {
    let digest = Sha256::digest(text.as_bytes());
    i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
