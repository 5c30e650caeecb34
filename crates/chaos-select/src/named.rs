//! Sampling among an enum's named constants.
//!
//! Each constant is drawn with probability proportional to its weight
//! (default 1), through the same pool walk as weighted choice.

use chaos_core::{Chaos, ChaosError};

use crate::weighted::Pool;

/// A field-less enum whose constants can be sampled.
///
/// Implement it by hand or with [`named_constants!`](crate::named_constants).
pub trait NamedConstants: Copy + 'static {
    /// Every constant, in declaration order.
    const CONSTANTS: &'static [Self];

    /// Relative selection frequency of this constant.
    fn weight(&self) -> u32 {
        1
    }
}

/// Picks one constant of `E`.
///
/// # Errors
///
/// Returns `ChaosError::EmptyInput` if `E` lists no constants or
/// `ChaosError::EmptyPool` if every weight is zero.
pub fn next_constant<S: Chaos + ?Sized, E: NamedConstants>(source: &S) -> Result<E, ChaosError> {
    Ok(*Pool::new(E::CONSTANTS, E::weight)?.draw(source))
}

/// Implements [`NamedConstants`] for an enum, with optional per-constant
/// weights.
///
/// ```
/// use chaos_select::named_constants;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Terrain {
///     Plains,
///     Forest,
///     Mountain,
/// }
///
/// named_constants!(Terrain { Plains => 5, Forest => 3, Mountain });
/// ```
#[macro_export]
macro_rules! named_constants {
    (@weight $weight:expr) => {
        $weight
    };
    (@weight) => {
        1
    };
    ($ty:ident { $($variant:ident $(=> $weight:expr)?),+ $(,)? }) => {
        impl $crate::NamedConstants for $ty {
            const CONSTANTS: &'static [Self] = &[$($ty::$variant),+];

            fn weight(&self) -> u32 {
                match self {
                    $($ty::$variant => $crate::named_constants!(@weight $($weight)?),)+
                }
            }
        }
    };
}
