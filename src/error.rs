//! Errors surfaced by the tree's public operations.
//!
//! Missing keys are never errors: lookups return `None` and mutations of
//! absent or duplicate keys are no-ops.

use thiserror::Error;

/// Result alias for fallible tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller supplied an argument that cannot drive a traversal.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
