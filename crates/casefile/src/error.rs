//! Error types for case file operations

use std::collections::TryReserveError;

use thiserror::Error;

/// Main error type for case file operations.
///
/// A missing clue or an empty table is not an error: lookups report those
/// through `bool` and `Option` results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseFileError {
    /// Storage for a node, entry or string copy could not be obtained
    #[error("Allocation failed while storing {what}")]
    AllocationFailed {
        /// What was being stored
        what: &'static str,
    },

    /// A clue or suspect name is longer than the configured bound
    #[error("{field} is too long: {len} bytes, at most {max} allowed")]
    KeyTooLong {
        /// Which input was rejected ("clue" or "suspect")
        field: &'static str,
        /// Length of the rejected input in bytes
        len: usize,
        /// Largest accepted length in bytes
        max: usize,
    },

    /// The configuration cannot back a case file
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CaseFileError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |_| CaseFileError::AllocationFailed { what }
    }
}

/// Result type alias for case file operations
pub type Result<T> = std::result::Result<T, CaseFileError>;

/// Copy `s` into freshly reserved owned storage.
///
/// # Errors
///
/// `AllocationFailed` if the buffer cannot be reserved.
pub(crate) fn try_copy(s: &str, what: &'static str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(CaseFileError::allocation(what))?;
    owned.push_str(s);
    Ok(owned)
}
