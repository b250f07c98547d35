//! The handful of error variants shared across every `drn-*` crate.
//!
//! Sub-crates define their own richer error enums (`GraphError`,
//! `RoutingError`, ...) and convert the shared cases into `CoreError` via
//! `From`, or embed `CoreError` as one variant. Both patterns are used
//! depending on which keeps the error site cleanest.

use thiserror::Error;

/// Error kinds genuinely common to two or more `drn-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// C1 lookup/delete on a key that was never inserted, or was deleted.
    #[error("key not found")]
    KeyNotFound,

    /// Configuration parameter outside its allowed range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Role quotas negative or summing to zero.
    #[error("invalid quotas: {0}")]
    InvalidQuotas(String),
}

/// Shorthand result type for shared `drn-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
