//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `BmError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `bm-core` and a common base for sub-crates.
///
/// Terminal trial statuses (`NoBigCollision`, `OutsideEnv`, …) are *not*
/// errors and never appear here.
#[derive(Debug, Error)]
pub enum BmError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParam {
        name:   &'static str,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `bm-*` crates.
pub type BmResult<T> = Result<T, BmError>;
