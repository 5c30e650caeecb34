//! Range mapping from raw samples to unit floats.

/// Maps a raw sample onto `[0, 1)`, or onto `[0, 1]` when `inclusive`.
///
/// The inclusive variant divides by `i32::MAX - 1`, the largest sample the
/// generator can produce, so that bound maps to exactly `1.0`.
#[must_use]
pub fn normalize(sample: i32, inclusive: bool) -> f64 {
    let effective_max = if inclusive { i32::MAX - 1 } else { i32::MAX };
    f64::from(sample) * (1.0 / f64::from(effective_max))
}
