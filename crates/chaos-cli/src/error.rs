//! Chaos CLI — error types.

use chaos_core::ChaosError;
use thiserror::Error;

/// Startup and runtime errors for the `chaos` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The engine rejected the requested draw.
    #[error("draw error: {0}")]
    Chaos(#[from] ChaosError),

    /// The report could not be serialized.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaos_error_converts_with_context() {
        let err = AppError::from(ChaosError::DivideByZero);
        assert!(matches!(err, AppError::Chaos(ChaosError::DivideByZero)));
        assert_eq!(err.to_string(), "draw error: attempting to divide by zero");
    }

    #[test]
    fn test_config_error_message() {
        let err = AppError::Config("CHAOS_COUNT must be a number".to_owned());
        assert_eq!(
            err.to_string(),
            "configuration error: CHAOS_COUNT must be a number"
        );
    }
}
