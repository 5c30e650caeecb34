//! Fisher–Yates shuffle.

use chaos_core::draws::ensure_not_empty;
use chaos_core::{Chaos, ChaosError, IntRange};

/// Shuffles `items` in place.
///
/// Walks from the last position down to the second, swapping each with a
/// position drawn from `[0, n]`. Consumes exactly `items.len() - 1` samples.
///
/// # Errors
///
/// Returns `ChaosError::EmptyInput` for an empty slice, or
/// `ChaosError::TooManyEntries` if its length exceeds `i32::MAX`.
pub fn shuffle<S: Chaos + ?Sized, T>(source: &S, items: &mut [T]) -> Result<(), ChaosError> {
    ensure_not_empty(items.len(), "list")?;
    if i32::try_from(items.len()).is_err() {
        return Err(ChaosError::TooManyEntries(items.len() as u64));
    }

    for n in (1..items.len()).rev() {
        // n + 1 <= len <= i32::MAX, checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let range = IntRange::below(n as i32 + 1)?;
        let k = source.next_in(range).unsigned_abs() as usize;
        items.swap(n, k);
    }
    Ok(())
}
