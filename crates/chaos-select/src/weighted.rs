//! Weighted selection.
//!
//! An item of weight `w` behaves as if it appeared `w` times in the pool;
//! weight zero means it is never chosen. The pool is never materialized: a
//! ticket in `[0, total)` is drawn and walked against the running weights,
//! which picks the same entry an expanded pool would.

use chaos_core::draws::ensure_not_empty;
use chaos_core::{Chaos, ChaosError, IntRange};

/// Values that carry their own selection weight.
pub trait Weighted {
    /// Relative selection frequency.
    fn weight(&self) -> u32;
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> u32 {
        (**self).weight()
    }
}

/// An explicit `(value, weight)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedValue<T> {
    /// The value to select.
    pub value: T,
    /// Relative selection frequency.
    pub weight: u32,
}

impl<T> WeightedValue<T> {
    /// Pairs `value` with a non-negative weight.
    #[must_use]
    pub fn new(value: T, weight: u32) -> Self {
        Self { value, weight }
    }

    /// Pairs `value` with a signed weight, rejecting negatives.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::NegativeWeight` if `weight < 0`.
    pub fn try_new(value: T, weight: i32) -> Result<Self, ChaosError> {
        let weight = u32::try_from(weight).map_err(|_| ChaosError::NegativeWeight(weight))?;
        Ok(Self { value, weight })
    }
}

impl<T> TryFrom<(T, i32)> for WeightedValue<T> {
    type Error = ChaosError;

    fn try_from((value, weight): (T, i32)) -> Result<Self, Self::Error> {
        Self::try_new(value, weight)
    }
}

impl<T> Weighted for WeightedValue<T> {
    fn weight(&self) -> u32 {
        self.weight
    }
}

/// A validated selection pool over borrowed items.
pub(crate) struct Pool<'a, T, W> {
    items: &'a [T],
    weight_of: W,
    tickets: IntRange,
    fallback: &'a T,
}

impl<'a, T, W> Pool<'a, T, W>
where
    W: Fn(&T) -> u32,
{
    /// Checks that `items` can be drawn from.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::EmptyInput` for an empty collection,
    /// `ChaosError::EmptyPool` if every weight is zero, or
    /// `ChaosError::TooManyEntries` if the weights sum past `i32::MAX`.
    pub(crate) fn new(items: &'a [T], weight_of: W) -> Result<Self, ChaosError> {
        ensure_not_empty(items.len(), "collection")?;

        let total: u64 = items.iter().map(|item| u64::from(weight_of(item))).sum();
        let fallback = items
            .iter()
            .rev()
            .find(|item| weight_of(*item) > 0)
            .ok_or(ChaosError::EmptyPool)?;
        let total = i32::try_from(total).map_err(|_| ChaosError::TooManyEntries(total))?;

        Ok(Self {
            items,
            weight_of,
            tickets: IntRange::below(total)?,
            fallback,
        })
    }

    /// Draws one entry from the pool.
    pub(crate) fn draw<S: Chaos + ?Sized>(&self, source: &S) -> &'a T {
        let mut ticket = source.next_in(self.tickets).unsigned_abs();
        self.items
            .iter()
            .find(|item| {
                let weight = (self.weight_of)(*item);
                if ticket < weight {
                    return true;
                }
                ticket -= weight;
                false
            })
            .unwrap_or(self.fallback)
    }
}

/// Picks one item, each with weight 1.
///
/// # Errors
///
/// Returns `ChaosError::EmptyInput` for an empty collection.
pub fn choose<'a, S: Chaos + ?Sized, T>(source: &S, items: &'a [T]) -> Result<&'a T, ChaosError> {
    Ok(Pool::new(items, |_: &T| 1)?.draw(source))
}

/// Picks one item by its own weight.
///
/// # Errors
///
/// Returns `ChaosError::EmptyInput` for an empty collection or
/// `ChaosError::EmptyPool` if every weight is zero.
pub fn choose_weighted<'a, S: Chaos + ?Sized, T: Weighted>(
    source: &S,
    items: &'a [T],
) -> Result<&'a T, ChaosError> {
    Ok(Pool::new(items, T::weight)?.draw(source))
}
