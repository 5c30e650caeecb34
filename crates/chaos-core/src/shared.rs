//! Process-wide default engine.
//!
//! Prefer passing an explicit `ChaosEngine` to the code that needs one. The
//! shared slot exists for callers that cannot thread an engine through; it
//! has its own lock, independent of every engine's state lock.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::engine::ChaosEngine;

static SHARED: RwLock<Option<Arc<ChaosEngine>>> = RwLock::new(None);

/// Returns the shared engine, creating an entropy-seeded one on first use.
#[must_use]
pub fn shared() -> Arc<ChaosEngine> {
    if let Some(engine) = SHARED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Arc::clone(engine);
    }

    let mut slot = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have filled the slot between the two locks.
    Arc::clone(slot.get_or_insert_with(|| {
        debug!("creating shared chaos engine");
        Arc::new(ChaosEngine::new())
    }))
}

/// Installs `engine` as the shared engine, or a fresh entropy-seeded engine
/// when `None`.
pub fn set_shared(engine: Option<Arc<ChaosEngine>>) {
    let engine = engine.unwrap_or_else(|| Arc::new(ChaosEngine::new()));
    debug!(seed = %engine.seed(), "replacing shared chaos engine");
    *SHARED.write().unwrap_or_else(PoisonError::into_inner) = Some(engine);
}
