//! Typed generators built on raw samples.
//!
//! `Chaos` is implemented for every [`SampleSource`], so the same rescaling
//! logic serves the engine and any scripted source used in tests. Ranged
//! operations validate their bounds before drawing, and bound-equality fast
//! paths return without consuming a sample.

use crate::draws::{Draws, ensure_count, ensure_not_empty};
use crate::error::ChaosError;
use crate::range::normalize;
use crate::source::SampleSource;

/// Validated half-open integer range `[min, max)`.
///
/// Validating once lets repeated draws over the same bounds skip the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: i32,
    max: i32,
}

impl IntRange {
    /// Creates the range `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `min >= max`.
    pub fn new(min: i32, max: i32) -> Result<Self, ChaosError> {
        check_exclusive(min, max)?;
        Ok(Self { min, max })
    }

    /// Creates the range `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `max <= 0`.
    pub fn below(max: i32) -> Result<Self, ChaosError> {
        Self::new(0, max)
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn min(self) -> i32 {
        self.min
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn max(self) -> i32 {
        self.max
    }
}

/// Typed draws, probabilities and repetition combinators.
pub trait Chaos: SampleSource {
    /// Draws one sample and maps it onto `[0, 1)` (or `[0, 1]` when
    /// `inclusive`).
    fn next_normalized(&self, inclusive: bool) -> f64 {
        normalize(self.next_sample(), inclusive)
    }

    /// Returns `true` or `false` with equal odds.
    fn next_boolean(&self) -> bool {
        integer_between(self, 0, 2) == 1
    }

    /// Returns any byte.
    fn next_byte(&self) -> u8 {
        byte_between(self, u8::MIN, u8::MAX)
    }

    /// Returns a byte in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `min > max`.
    fn next_byte_in(&self, min: u8, max: u8) -> Result<u8, ChaosError> {
        check_inclusive(min, max)?;
        Ok(byte_between(self, min, max))
    }

    /// Returns a byte in `[0, max]`.
    fn next_byte_upto(&self, max: u8) -> u8 {
        byte_between(self, 0, max)
    }

    /// Returns a raw sample in `[0, i32::MAX)`.
    fn next_integer(&self) -> i32 {
        self.next_sample()
    }

    /// Returns an integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `min >= max`.
    fn next_integer_in(&self, min: i32, max: i32) -> Result<i32, ChaosError> {
        IntRange::new(min, max).map(|range| self.next_in(range))
    }

    /// Returns an integer in a pre-validated range.
    ///
    /// A range holding a single value returns it without drawing a sample.
    fn next_in(&self, range: IntRange) -> i32 {
        integer_between(self, range.min, range.max)
    }

    /// Returns an integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `max <= 0`.
    fn next_integer_below(&self, max: i32) -> Result<i32, ChaosError> {
        self.next_integer_in(0, max)
    }

    /// Returns a float in `[0, 1]`.
    #[allow(clippy::cast_possible_truncation)]
    fn next_float(&self) -> f32 {
        self.next_normalized(true) as f32
    }

    /// Returns a float in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `min > max` or either bound
    /// is NaN or infinite.
    fn next_float_in(&self, min: f32, max: f32) -> Result<f32, ChaosError> {
        check_float(min, max)?;
        Ok(float_between(self, min, max))
    }

    /// Returns a float in `[0, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::BoundsOutOfOrder` if `max` is negative or not finite.
    fn next_float_upto(&self, max: f32) -> Result<f32, ChaosError> {
        self.next_float_in(0.0, max)
    }

    /// Returns `true` with `percent` percent probability.
    ///
    /// Thresholds of 100 or more always succeed and thresholds of 0 or less
    /// always fail, neither consuming a sample.
    fn next_percent(&self, percent: i32) -> bool {
        percent >= 100 || (percent > 0 && integer_between(self, 0, 100) < percent)
    }

    /// Returns `true` with probability `fraction`.
    ///
    /// Fractions of 1.0 or more always succeed and fractions of 0.0 or less
    /// always fail, neither consuming a sample.
    fn next_probability(&self, fraction: f32) -> bool {
        fraction >= 1.0 || (fraction > 0.0 && self.next_float() < fraction)
    }

    /// Returns `true` with probability `a / b`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::DivideByZero` if `b` is zero.
    #[allow(clippy::cast_precision_loss)]
    fn next_odds(&self, a: i32, b: i32) -> Result<bool, ChaosError> {
        self.next_odds_f32(a as f32, b as f32)
    }

    /// Float form of [`Chaos::next_odds`].
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::DivideByZero` if `b` is zero.
    fn next_odds_f32(&self, a: f32, b: f32) -> Result<bool, ChaosError> {
        check_denominator(b)?;
        Ok(self.next_probability(a / b))
    }

    /// Fills `buffer` with one draw per slot, in order.
    ///
    /// All draws complete before any slot is written, so a failing draw
    /// leaves `buffer` untouched.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::EmptyInput` for an empty buffer, or the first
    /// error returned by `draw`.
    fn fill_with<T, F>(&self, buffer: &mut [T], mut draw: F) -> Result<(), ChaosError>
    where
        F: FnMut(&Self) -> Result<T, ChaosError>,
    {
        ensure_not_empty(buffer.len(), "buffer")?;
        let values = buffer
            .iter()
            .map(|_| draw(self))
            .collect::<Result<Vec<T>, ChaosError>>()?;
        for (slot, value) in buffer.iter_mut().zip(values) {
            *slot = value;
        }
        Ok(())
    }

    /// Returns a lazy sequence of `count` draws.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn draws<'a, T, F>(&'a self, count: usize, draw: F) -> Result<Draws<'a, Self, T>, ChaosError>
    where
        F: FnMut(&Self) -> T + 'a,
    {
        ensure_count(count)?;
        Ok(Draws::new(self, count, Box::new(draw)))
    }

    /// `count` booleans.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn booleans(&self, count: usize) -> Result<Draws<'_, Self, bool>, ChaosError> {
        self.draws(count, |s| s.next_boolean())
    }

    /// `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn bytes(&self, count: usize) -> Result<Draws<'_, Self, u8>, ChaosError> {
        self.draws(count, |s| s.next_byte())
    }

    /// `count` bytes in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, or
    /// `ChaosError::BoundsOutOfOrder` if `min > max`.
    fn bytes_in(&self, count: usize, min: u8, max: u8) -> Result<Draws<'_, Self, u8>, ChaosError> {
        ensure_count(count)?;
        check_inclusive(min, max)?;
        self.draws(count, move |s| byte_between(s, min, max))
    }

    /// `count` raw integers.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn integers(&self, count: usize) -> Result<Draws<'_, Self, i32>, ChaosError> {
        self.draws(count, |s| s.next_integer())
    }

    /// `count` integers in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, or
    /// `ChaosError::BoundsOutOfOrder` if `min >= max`.
    fn integers_in(
        &self,
        count: usize,
        min: i32,
        max: i32,
    ) -> Result<Draws<'_, Self, i32>, ChaosError> {
        ensure_count(count)?;
        let range = IntRange::new(min, max)?;
        self.draws(count, move |s| s.next_in(range))
    }

    /// `count` floats in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn floats(&self, count: usize) -> Result<Draws<'_, Self, f32>, ChaosError> {
        self.draws(count, |s| s.next_float())
    }

    /// `count` floats in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, or
    /// `ChaosError::BoundsOutOfOrder` if `min > max`.
    fn floats_in(
        &self,
        count: usize,
        min: f32,
        max: f32,
    ) -> Result<Draws<'_, Self, f32>, ChaosError> {
        ensure_count(count)?;
        check_float(min, max)?;
        self.draws(count, move |s| float_between(s, min, max))
    }

    /// `count` percent checks.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn percents(&self, count: usize, percent: i32) -> Result<Draws<'_, Self, bool>, ChaosError> {
        self.draws(count, move |s| s.next_percent(percent))
    }

    /// `count` probability checks.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero.
    fn probabilities(
        &self,
        count: usize,
        fraction: f32,
    ) -> Result<Draws<'_, Self, bool>, ChaosError> {
        self.draws(count, move |s| s.next_probability(fraction))
    }

    /// `count` odds checks.
    ///
    /// # Errors
    ///
    /// Returns `ChaosError::CountTooLow` if `count` is zero, or
    /// `ChaosError::DivideByZero` if `b` is zero.
    fn odds(&self, count: usize, a: f32, b: f32) -> Result<Draws<'_, Self, bool>, ChaosError> {
        ensure_count(count)?;
        check_denominator(b)?;
        self.draws(count, move |s| s.next_probability(a / b))
    }
}

impl<S: SampleSource + ?Sized> Chaos for S {}

fn check_exclusive(min: i32, max: i32) -> Result<(), ChaosError> {
    if min >= max {
        return Err(ChaosError::exclusive_bounds());
    }
    Ok(())
}

fn check_inclusive<T: PartialOrd>(min: T, max: T) -> Result<(), ChaosError> {
    if min > max {
        return Err(ChaosError::inclusive_bounds());
    }
    Ok(())
}

fn check_float(min: f32, max: f32) -> Result<(), ChaosError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChaosError::inclusive_bounds());
    }
    check_inclusive(min, max)
}

fn check_denominator(b: f32) -> Result<(), ChaosError> {
    if b == 0.0 {
        return Err(ChaosError::DivideByZero);
    }
    Ok(())
}

/// Integer in `[min, max)`; callers have already checked `min < max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integer_between<S: SampleSource + ?Sized>(source: &S, min: i32, max: i32) -> i32 {
    if min == max - 1 {
        return min;
    }
    let span = i64::from(max) - i64::from(min);
    let offset = (normalize(source.next_sample(), false) * span as f64).floor() as i64;
    (i64::from(min) + offset) as i32
}

/// Byte in `[min, max]`; callers have already checked `min <= max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte_between<S: SampleSource + ?Sized>(source: &S, min: u8, max: u8) -> u8 {
    if min == max {
        return min;
    }
    integer_between(source, i32::from(min), i32::from(max) + 1) as u8
}

/// Float in `[min, max]`; callers have already checked `min <= max`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn float_between<S: SampleSource + ?Sized>(source: &S, min: f32, max: f32) -> f32 {
    if min == max {
        return min;
    }
    let unit = normalize(source.next_sample(), true);
    let value = f64::from(min) + unit * (f64::from(max) - f64::from(min));
    (value as f32).min(max)
}
