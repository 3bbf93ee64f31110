//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Time;

/// Errors produced by `atsipp-core` constructors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid interval [{lower}, {upper})")]
    InvalidInterval { lower: Time, upper: Time },
}

/// Shorthand result type for `atsipp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
