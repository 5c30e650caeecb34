//! Selection methods on any chaos source.

use chaos_core::draws::ensure_count;
use chaos_core::{Chaos, ChaosError, Draws};

use crate::named::NamedConstants;
use crate::shuffle;
use crate::weighted::{self, Pool, Weighted, WeightedValue};

/// Shuffling and choice, available on every [`Chaos`] source.
///
/// Single draws validate their input on every call. The `*_many` variants
/// validate the count, then the input, once, and return a lazy [`Draws`]
/// sequence over the validated pool.
pub trait ChaosSelect: Chaos {
    /// Shuffles `items` in place.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::EmptyInput` for an empty slice.
    fn shuffle<T>(&self, items: &mut [T]) -> Result<(), ChaosError> {
        shuffle::shuffle(self, items)
    }

    /// Picks one item uniformly.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::EmptyInput` for an empty collection.
    fn choose<'a, T>(&self, items: &'a [T]) -> Result<&'a T, ChaosError> {
        weighted::choose(self, items)
    }

    /// Picks one item in proportion to its weight.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::EmptyInput` for an empty collection or
    /// `ChaosError::EmptyPool` if every weight is zero.
    fn choose_weighted<'a, T: Weighted>(&self, items: &'a [T]) -> Result<&'a T, ChaosError> {
        weighted::choose_weighted(self, items)
    }

    /// Picks one value from explicit `(value, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ChaosSelect::choose_weighted`].
    fn choose_value<'a, T>(&self, items: &'a [WeightedValue<T>]) -> Result<&'a T, ChaosError> {
        Ok(&weighted::choose_weighted(self, items)?.value)
    }

    /// Picks one constant of `E` by its weight.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::EmptyInput` if `E` has no constants or
    /// `ChaosError::EmptyPool` if every weight is zero.
    fn next_enum<E: NamedConstants>(&self) -> Result<E, ChaosError> {
        crate::named::next_constant(self)
    }

    /// `count` uniform picks.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, otherwise the
    /// errors of [`ChaosSelect::choose`].
    fn choose_many<'a, T>(
        &'a self,
        items: &'a [T],
        count: usize,
    ) -> Result<Draws<'a, Self, &'a T>, ChaosError> {
        ensure_count(count)?;
        let pool = Pool::new(items, |_: &T| 1)?;
        self.draws(count, move |s| pool.draw(s))
    }

    /// `count` weighted picks.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, otherwise the
    /// errors of [`ChaosSelect::choose_weighted`].
    fn choose_weighted_many<'a, T: Weighted>(
        &'a self,
        items: &'a [T],
        count: usize,
    ) -> Result<Draws<'a, Self, &'a T>, ChaosError> {
        ensure_count(count)?;
        let pool = Pool::new(items, T::weight)?;
        self.draws(count, move |s| pool.draw(s))
    }

    /// `count` picks from explicit `(value, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ChaosSelect::choose_weighted_many`].
    fn choose_values_many<'a, T>(
        &'a self,
        items: &'a [WeightedValue<T>],
        count: usize,
    ) -> Result<Draws<'a, Self, &'a T>, ChaosError> {
        ensure_count(count)?;
        let pool = Pool::new(items, |item: &WeightedValue<T>| item.weight)?;
        self.draws(count, move |s| &pool.draw(s).value)
    }

    /// `count` enum constants.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, otherwise the
    /// errors of [`ChaosSelect::next_enum`].
    fn next_enums<E: NamedConstants>(
        &self,
        count: usize,
    ) -> Result<Draws<'_, Self, E>, ChaosError> {
        ensure_count(count)?;
        let pool = Pool::new(E::CONSTANTS, E::weight)?;
        self.draws(count, move |s| *pool.draw(s))
    }
}

impl<S: Chaos + ?Sized> ChaosSelect for S {}
