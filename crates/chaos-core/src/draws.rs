//! Repetition of scalar draws.
//!
//! Every buffer-filling and count-producing operation goes through the two
//! combinators in this module instead of re-implementing the loop per type.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::ChaosError;

/// Lazy sequence of `count` scalar draws against one source.
///
/// Items are produced in order, one draw per `next`, so the values depend
/// only on the source state at the time each item is pulled.
pub struct Draws<'a, S: ?Sized, T> {
    source: &'a S,
    remaining: usize,
    draw: Box<dyn FnMut(&S) -> T + 'a>,
}

impl<'a, S: ?Sized, T> Draws<'a, S, T> {
    pub(crate) fn new(source: &'a S, count: usize, draw: Box<dyn FnMut(&S) -> T + 'a>) -> Self {
        Self {
            source,
            remaining: count,
            draw,
        }
    }
}

impl<S: ?Sized, T> Iterator for Draws<'_, S, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.draw)(self.source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: ?Sized, T> ExactSizeIterator for Draws<'_, S, T> {}

impl<S: ?Sized, T> FusedIterator for Draws<'_, S, T> {}

impl<S: ?Sized, T> fmt::Debug for Draws<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draws")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Rejects counts below one.
///
/// # Errors
///
/// Returns `ChaosError::CountTooLow` when `count` is zero.
pub fn ensure_count(count: usize) -> Result<(), ChaosError> {
    if count < 1 {
        return Err(ChaosError::CountTooLow("count"));
    }
    Ok(())
}

/// Rejects empty buffers and collections.
///
/// # Errors
///
/// Returns `ChaosError::EmptyInput` naming `what` when `len` is zero.
pub fn ensure_not_empty(len: usize, what: &'static str) -> Result<(), ChaosError> {
    if len < 1 {
        return Err(ChaosError::EmptyInput(what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_yields_exactly_count_items() {
        let counter = std::cell::Cell::new(0);
        let draws = Draws::new(
            &counter,
            3,
            Box::new(|c: &std::cell::Cell<i32>| {
                c.set(c.get() + 1);
                c.get()
            }),
        );
        assert_eq!(draws.len(), 3);
        assert_eq!(draws.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_draws_is_lazy() {
        let counter = std::cell::Cell::new(0);
        let mut draws = Draws::new(
            &counter,
            5,
            Box::new(|c: &std::cell::Cell<i32>| c.replace(c.get() + 1)),
        );
        assert_eq!(counter.get(), 0);
        draws.next();
        assert_eq!(counter.get(), 1);
        assert_eq!(draws.len(), 4);
    }

    #[test]
    fn test_ensure_count_rejects_zero() {
        assert_eq!(ensure_count(0), Err(ChaosError::CountTooLow("count")));
        assert!(ensure_count(1).is_ok());
    }

    #[test]
    fn test_ensure_not_empty_names_input() {
        assert_eq!(
            ensure_not_empty(0, "list"),
            Err(ChaosError::EmptyInput("list"))
        );
        assert!(ensure_not_empty(2, "list").is_ok());
    }
}
