//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they need it.

use thiserror::Error;

/// Errors produced by `eco-core` validation and parsing helpers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `eco-core`.
pub type CoreResult<T> = Result<T, CoreError>;
