//! Integration tests for the process-wide shared engine.
//!
//! Kept in its own test binary, as a single test, because it mutates global
//! state.

use std::sync::Arc;

use chaos_core::{Chaos, ChaosEngine, set_shared, shared};

#[test]
fn test_shared_engine_lifecycle() {
    // Concurrent first use yields one instance.
    let engines: Vec<Arc<ChaosEngine>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(shared)).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(engines.iter().all(|e| Arc::ptr_eq(e, &engines[0])));
    assert!(Arc::ptr_eq(&shared(), &engines[0]));

    // Installing an explicit engine replaces it.
    let seeded = Arc::new(ChaosEngine::with_seed(1));
    set_shared(Some(Arc::clone(&seeded)));
    assert!(Arc::ptr_eq(&shared(), &seeded));
    let values: Vec<i32> = shared().integers_in(5, 0, 10).unwrap().collect();
    assert_eq!(values, vec![1, 6, 1, 9, 8]);

    // Installing nothing creates a fresh default engine.
    set_shared(None);
    let fresh = shared();
    assert!(!Arc::ptr_eq(&fresh, &seeded));
    assert!(Arc::ptr_eq(&fresh, &shared()));
}
