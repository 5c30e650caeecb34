//! Error types for the chaos engine.

use thiserror::Error;

/// Precondition violations reported by engine operations.
///
/// Every variant is detected before the engine state is touched, so a failed
/// call never consumes a sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChaosError {
    /// The lower bound is above (or, for exclusive ranges, not below) the
    /// upper bound.
    #[error("'{min}' cannot be {} '{max}'", comparison(.inclusive))]
    BoundsOutOfOrder {
        /// Name of the lower-bound parameter.
        min: &'static str,
        /// Name of the upper-bound parameter.
        max: &'static str,
        /// Whether the upper bound was inclusive.
        inclusive: bool,
    },

    /// A buffer or collection had no elements.
    #[error("'{0}' cannot be empty or contain less than one element")]
    EmptyInput(&'static str),

    /// A requested count was below one.
    #[error("'{0}' cannot be less than one")]
    CountTooLow(&'static str),

    /// Odds were requested with a zero denominator.
    #[error("attempting to divide by zero")]
    DivideByZero,

    /// A weighted pair was built with a negative weight.
    #[error("weight cannot be negative: {0}")]
    NegativeWeight(i32),

    /// Every weight in a weighted collection was zero.
    #[error("weighted pool is empty: every weight is zero")]
    EmptyPool,

    /// A collection or weighted pool has more entries than the integer
    /// generator can index.
    #[error("{0} entries exceed the integer generator's range")]
    TooManyEntries(u64),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn comparison(inclusive: &bool) -> &'static str {
    if *inclusive {
        "greater than"
    } else {
        "greater than or equal to"
    }
}

impl ChaosError {
    /// Ordering error for an exclusive upper bound (`min >= max`).
    pub(crate) const fn exclusive_bounds() -> Self {
        Self::BoundsOutOfOrder {
            min: "min",
            max: "max",
            inclusive: false,
        }
    }

    /// Ordering error for an inclusive upper bound (`min > max`).
    pub(crate) const fn inclusive_bounds() -> Self {
        Self::BoundsOutOfOrder {
            min: "min",
            max: "max",
            inclusive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_messages_name_the_comparison() {
        assert_eq!(
            ChaosError::exclusive_bounds().to_string(),
            "'min' cannot be greater than or equal to 'max'"
        );
        assert_eq!(
            ChaosError::inclusive_bounds().to_string(),
            "'min' cannot be greater than 'max'"
        );
    }

    #[test]
    fn test_empty_input_names_the_parameter() {
        assert_eq!(
            ChaosError::EmptyInput("buffer").to_string(),
            "'buffer' cannot be empty or contain less than one element"
        );
    }
}
