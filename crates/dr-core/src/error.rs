//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where configuration flows through them.

use thiserror::Error;

/// The top-level error type for `dr-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("speed {0} is outside 0.01..=0.10")]
    SpeedOutOfRange(f32),

    #[error("grid spacing {0} is not one of 20, 30, 40, 50, 60")]
    UnknownDensity(u32),
}

/// Shorthand result type for `dr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
