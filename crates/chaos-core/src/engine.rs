//! The chaos engine: one seeded subtractive state behind a lock.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::RngCore;
use tracing::debug;

use crate::entropy::{Entropy, SystemEntropy};
use crate::generators::Chaos;
use crate::seed::{ResolvedSeed, Seed, resolve};
use crate::source::SampleSource;
use crate::state::SubtractiveState;

/// Seedable, thread-safe pseudorandom engine.
///
/// All methods take `&self`; share an engine across threads with `Arc`.
/// Sequences are reproducible only for a single logical thread of calls.
/// This generator is not cryptographically secure.
pub struct ChaosEngine {
    inner: Mutex<Inner>,
}

struct Inner {
    label: String,
    state: SubtractiveState,
}

impl ChaosEngine {
    /// Creates an engine seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_entropy(&SystemEntropy)
    }

    /// Creates an engine from an integer or text seed.
    ///
    /// `Seed::Entropy` and empty text fall back to system entropy.
    #[must_use]
    pub fn with_seed(seed: impl Into<Seed>) -> Self {
        Self::from_resolved(resolve(&seed.into(), &SystemEntropy))
    }

    /// Creates an engine seeded from the given entropy source.
    #[must_use]
    pub fn with_entropy(entropy: &dyn Entropy) -> Self {
        Self::from_resolved(resolve(&Seed::Entropy, entropy))
    }

    fn from_resolved(resolved: ResolvedSeed) -> Self {
        log_reseed(&resolved);
        Self {
            inner: Mutex::new(Inner {
                state: SubtractiveState::seeded(resolved.value),
                label: resolved.label,
            }),
        }
    }

    /// Returns the label of the seed currently in effect.
    #[must_use]
    pub fn seed(&self) -> String {
        self.lock().label.clone()
    }

    /// Reseeds from text, as if the engine had been built with it.
    pub fn set_seed(&self, seed: &str) {
        self.reseed_with(seed);
    }

    /// Rewinds the engine to the start of its current seed's sequence.
    ///
    /// The label is resolved and applied under one lock, so a concurrent
    /// `set_seed` is never overwritten by the old label.
    pub fn reset(&self) {
        let mut inner = self.lock();
        // Labels are never empty, so resolving one never draws entropy.
        let resolved = resolve(&Seed::Text(inner.label.clone()), &SystemEntropy);
        log_reseed(&resolved);
        inner.state.reseed(resolved.value);
    }

    /// Reseeds from system entropy.
    pub fn reseed(&self) {
        self.reseed_from_entropy(&SystemEntropy);
    }

    /// Reseeds from the given entropy source.
    pub fn reseed_from_entropy(&self, entropy: &dyn Entropy) {
        self.apply(resolve(&Seed::Entropy, entropy));
    }

    /// Reseeds from an integer or text seed.
    pub fn reseed_with(&self, seed: impl Into<Seed>) {
        self.apply(resolve(&seed.into(), &SystemEntropy));
    }

    fn apply(&self, resolved: ResolvedSeed) {
        log_reseed(&resolved);
        let mut inner = self.lock();
        inner.state.reseed(resolved.value);
        inner.label = resolved.label;
    }

    /// Current `(next, next_p)` read indices of the state ring.
    ///
    /// Each sample advances both indices by one, modulo 55.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.lock().state.cursor()
    }

    // The critical sections never panic, so a poisoned lock still guards a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_reseed(resolved: &ResolvedSeed) {
    debug!(
        seed = %resolved.label,
        from_entropy = resolved.from_entropy,
        "seeding chaos engine"
    );
}

impl SampleSource for ChaosEngine {
    fn next_sample(&self) -> i32 {
        self.lock().state.next_sample()
    }
}

impl Default for ChaosEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChaosEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ChaosEngine")
            .field("seed", &inner.label)
            .field("cursor", &inner.state.cursor())
            .finish()
    }
}

impl RngCore for ChaosEngine {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0_u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32()) | (u64::from(self.next_u32()) << 32)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = self.next_byte();
        }
    }
}
