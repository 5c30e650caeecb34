//! Configuration read from `CHAOS_*` environment variables.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::AppError;

/// Largest `CHAOS_COUNT` accepted; every drawn value is held in memory.
pub const MAX_COUNT: usize = 1 << 20;

/// Longest range the `shuffle` kind will materialize.
pub const MAX_SHUFFLE_LEN: i64 = 1 << 20;

/// What to draw, with bounds already parsed for the kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// Fair coin flips.
    Boolean,
    /// Bytes in `[min, max]`.
    Byte { min: u8, max: u8 },
    /// Integers in `[min, max)`.
    Integer { min: i32, max: i32 },
    /// Floats in `[min, max]`.
    Float { min: f32, max: f32 },
    /// Percent checks against `percent`.
    Probability { percent: i32 },
    /// A permutation of `min..max`.
    Shuffle { min: i32, max: i32 },
}

impl Draw {
    /// Name reported in the output document.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte { .. } => "byte",
            Self::Integer { .. } => "integer",
            Self::Float { .. } => "float",
            Self::Probability { .. } => "probability",
            Self::Shuffle { .. } => "shuffle",
        }
    }
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seed text; `None` seeds from entropy.
    pub seed: Option<String>,
    /// Number of values to draw.
    pub count: usize,
    /// Kind and bounds of each value.
    pub draw: Draw,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first invalid variable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first invalid variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("CHAOS_SEED").filter(|seed| !seed.is_empty());
        let count: usize = parse_or(&lookup, "CHAOS_COUNT", 10)?;
        if !(1..=MAX_COUNT).contains(&count) {
            return Err(AppError::Config(format!(
                "CHAOS_COUNT must be between 1 and {MAX_COUNT} (got {count})"
            )));
        }
        let kind = lookup("CHAOS_KIND").unwrap_or_else(|| "integer".to_owned());

        let draw = match kind.trim().to_ascii_lowercase().as_str() {
            "boolean" => Draw::Boolean,
            "byte" => Draw::Byte {
                min: parse_or(&lookup, "CHAOS_MIN", 0)?,
                max: parse_or(&lookup, "CHAOS_MAX", u8::MAX)?,
            },
            "integer" => Draw::Integer {
                min: parse_or(&lookup, "CHAOS_MIN", 0)?,
                max: parse_or(&lookup, "CHAOS_MAX", 100)?,
            },
            "float" => Draw::Float {
                min: parse_or(&lookup, "CHAOS_MIN", 0.0)?,
                max: parse_or(&lookup, "CHAOS_MAX", 1.0)?,
            },
            "probability" => Draw::Probability {
                percent: parse_or(&lookup, "CHAOS_PERCENT", 50)?,
            },
            "shuffle" => {
                let default_max = i32::try_from(count).unwrap_or(i32::MAX);
                let min = parse_or(&lookup, "CHAOS_MIN", 0)?;
                let max = parse_or(&lookup, "CHAOS_MAX", default_max)?;
                if i64::from(max) - i64::from(min) > MAX_SHUFFLE_LEN {
                    return Err(AppError::Config(format!(
                        "CHAOS_MIN..CHAOS_MAX must span at most {MAX_SHUFFLE_LEN} values"
                    )));
                }
                Draw::Shuffle { min, max }
            }
            other => {
                return Err(AppError::Config(format!(
                    "CHAOS_KIND must be one of boolean, byte, integer, float, probability, shuffle (got {other:?})"
                )));
            }
        };

        Ok(Self { seed, count, draw })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{name} must be a valid number: {e}"))),
        None => Ok(default),
    }
}
