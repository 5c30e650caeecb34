//! Chaos CLI — draws a batch of values from a configured engine.
//!
//! The binary is a thin wrapper: configuration comes from `CHAOS_*`
//! environment variables and the result is one JSON document on stdout.

pub mod config;
pub mod error;
pub mod report;

pub use config::{Config, Draw};
pub use error::AppError;
pub use report::{Report, Values, run};
