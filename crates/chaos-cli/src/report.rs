//! The JSON document printed by the binary, and the run that produces it.

use chaos_core::{Chaos, ChaosEngine};
use chaos_select::ChaosSelect;
use serde::Serialize;
use tracing::info;

use crate::config::{Config, Draw};
use crate::error::AppError;

/// Drawn values, serialized as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Booleans(Vec<bool>),
    Bytes(Vec<u8>),
    Integers(Vec<i32>),
    Floats(Vec<f32>),
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Label of the seed that produced `values`; replaying it reproduces them.
    pub seed: String,
    pub kind: &'static str,
    pub values: Values,
}

/// Builds an engine from `config` and draws the requested values.
///
/// # Errors
///
/// Returns `AppError::Chaos` if the engine rejects the count or bounds.
pub fn run(config: &Config) -> Result<Report, AppError> {
    let engine = ChaosEngine::with_seed(config.seed.clone());
    info!(
        seed = %engine.seed(),
        kind = config.draw.kind(),
        count = config.count,
        "drawing values"
    );

    let values = draw(&engine, config)?;
    Ok(Report {
        seed: engine.seed(),
        kind: config.draw.kind(),
        values,
    })
}

/// Draws the values `config` asks for from `source`.
///
/// # Errors
///
/// Returns `AppError::Chaos` if the source rejects the count or bounds.
pub fn draw<S: Chaos + ?Sized>(source: &S, config: &Config) -> Result<Values, AppError> {
    let count = config.count;
    let values = match config.draw {
        Draw::Boolean => Values::Booleans(source.booleans(count)?.collect()),
        Draw::Byte { min, max } => Values::Bytes(source.bytes_in(count, min, max)?.collect()),
        Draw::Integer { min, max } => {
            Values::Integers(source.integers_in(count, min, max)?.collect())
        }
        Draw::Float { min, max } => Values::Floats(source.floats_in(count, min, max)?.collect()),
        Draw::Probability { percent } => {
            Values::Booleans(source.percents(count, percent)?.collect())
        }
        Draw::Shuffle { min, max } => {
            let mut items: Vec<i32> = (min..max).collect();
            source.shuffle(&mut items)?;
            Values::Integers(items)
        }
    };
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(draw: Draw, count: usize) -> Config {
        Config {
            seed: Some("1".to_owned()),
            count,
            draw,
        }
    }

    #[test]
    fn test_integer_run_is_reproducible() {
        let report = run(&seeded(Draw::Integer { min: 0, max: 10 }, 5)).unwrap();
        assert_eq!(report.seed, "1");
        assert_eq!(report.kind, "integer");
        assert_eq!(report.values, Values::Integers(vec![1, 6, 1, 9, 8]));
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let err = run(&seeded(Draw::Boolean, 0)).unwrap_err();
        assert!(matches!(err, AppError::Chaos(_)));
    }

    #[test]
    fn test_empty_shuffle_range_is_rejected() {
        let err = run(&seeded(Draw::Shuffle { min: 3, max: 3 }, 1)).unwrap_err();
        assert!(matches!(err, AppError::Chaos(_)));
    }

    #[test]
    fn test_report_serializes_flat_values() {
        let report = Report {
            seed: "x".to_owned(),
            kind: "byte",
            values: Values::Bytes(vec![1, 2]),
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"seed":"x","kind":"byte","values":[1,2]}"#
        );
    }
}
