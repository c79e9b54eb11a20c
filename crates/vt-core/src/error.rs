//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `VtError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// Errors raised while constructing core values from untrusted input.
#[derive(Debug, Error)]
pub enum VtError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `vt-core`.
pub type VtResult<T> = Result<T, VtError>;
