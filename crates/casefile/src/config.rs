//! Case file configuration

use crate::error::{CaseFileError, Result};

/// Number of buckets in the association table unless configured otherwise.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Name buffer size in bytes, terminator included, unless configured otherwise.
///
/// A name may therefore hold at most `DEFAULT_MAX_NAME_LEN - 1` bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 50;

/// Fixed limits of a case file.
///
/// Both values are read once when the [`CaseFile`](crate::CaseFile) is
/// built; the table is never resized afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseFileConfig {
    /// Number of association table buckets
    pub bucket_count: usize,

    /// Name buffer size in bytes, including the terminator
    pub max_name_len: usize,
}

impl Default for CaseFileConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl CaseFileConfig {
    /// Create a configuration with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different number of buckets.
    pub fn with_bucket_count(self, bucket_count: usize) -> Self {
        Self {
            bucket_count,
            ..self
        }
    }

    /// Use a different name buffer size.
    pub fn with_max_name_len(self, max_name_len: usize) -> Self {
        Self {
            max_name_len,
            ..self
        }
    }

    /// Largest accepted clue or suspect length in bytes.
    pub fn max_name_bytes(&self) -> usize {
        self.max_name_len.saturating_sub(1)
    }

    /// Check that the limits can back a case file.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when there are no buckets or a name buffer cannot
    /// hold anything besides its terminator.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(CaseFileError::InvalidConfig(
                "bucket count must be at least 1".to_string(),
            ));
        }
        if self.max_name_len < 2 {
            return Err(CaseFileError::InvalidConfig(format!(
                "name length {} leaves no room for content",
                self.max_name_len
            )));
        }
        Ok(())
    }

    /// Reject a name longer than [`max_name_bytes`](Self::max_name_bytes).
    ///
    /// # Errors
    ///
    /// `KeyTooLong` naming `field`.
    pub fn check_name(&self, field: &'static str, name: &str) -> Result<()> {
        let max = self.max_name_bytes();
        if name.len() > max {
            return Err(CaseFileError::KeyTooLong {
                field,
                len: name.len(),
                max,
            });
        }
        Ok(())
    }
}
