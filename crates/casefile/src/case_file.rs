//! The case file: clue index and association table joined by clue name

use crate::config::CaseFileConfig;
use crate::error::Result;
use crate::index::{ClueIndex, ClueIter};
use crate::table::{AssociationTable, Buckets};
use crate::tally::TopSuspect;

/// Outcome of [`CaseFile::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    /// The clue was new: it was indexed and its first suspect linked
    NewClue,

    /// The clue was already indexed: only the suspect link was added
    KnownClue,
}

/// Everything gathered during an investigation.
///
/// Owns both structures; they share no storage, so releasing them is
/// independent.
///
/// # Example
///
/// ```
/// use casefile::{CaseFile, Recorded};
///
/// let mut case = CaseFile::new();
/// assert_eq!(case.record("knife", "Green").unwrap(), Recorded::NewClue);
/// assert_eq!(case.record("knife", "Plum").unwrap(), Recorded::KnownClue);
/// case.record("rope", "Green").unwrap();
///
/// assert_eq!(case.clues().collect::<Vec<_>>(), vec!["knife", "rope"]);
/// let top = case.top_suspect().unwrap();
/// assert_eq!((top.suspect.as_str(), top.count), ("Green", 2));
/// ```
#[derive(Debug, Clone)]
pub struct CaseFile {
    config: CaseFileConfig,
    index: ClueIndex,
    table: AssociationTable,
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseFile {
    /// Create an empty case file with the default limits.
    pub fn new() -> Self {
        Self {
            config: CaseFileConfig::default(),
            index: ClueIndex::new(),
            table: AssociationTable::with_buckets(crate::config::DEFAULT_BUCKET_COUNT)
                .unwrap_or_else(|e| unreachable!("default bucket count is valid: {e}")),
        }
    }

    /// Create an empty case file with custom limits.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the limits fail [`CaseFileConfig::validate`]
    /// - `AllocationFailed` if the bucket array cannot be reserved
    pub fn with_config(config: CaseFileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            index: ClueIndex::new(),
            table: AssociationTable::with_buckets(config.bucket_count)?,
        })
    }

    /// The limits this case file was built with.
    pub fn config(&self) -> &CaseFileConfig {
        &self.config
    }

    /// Link `suspect` to `clue`, indexing the clue if it is new.
    ///
    /// Linking the same pair twice records it twice.
    ///
    /// # Errors
    ///
    /// - `KeyTooLong` if either name exceeds the configured bound; nothing
    ///   is recorded
    /// - `AllocationFailed` if storage runs out
    pub fn record(&mut self, clue: &str, suspect: &str) -> Result<Recorded> {
        self.config.check_name("clue", clue)?;
        self.config.check_name("suspect", suspect)?;

        let outcome = if self.index.contains(clue) {
            Recorded::KnownClue
        } else {
            self.index.insert(clue)?;
            Recorded::NewClue
        };
        self.table.insert(clue, suspect)?;

        tracing::debug!(clue, suspect, ?outcome, "recorded association");
        Ok(outcome)
    }

    /// Check whether `clue` has been recorded.
    pub fn find_clue(&self, clue: &str) -> bool {
        self.index.contains(clue)
    }

    /// Every recorded clue in ascending byte-wise order.
    pub fn clues(&self) -> ClueIter<'_> {
        self.index.iter()
    }

    /// Every association grouped by bucket.
    pub fn associations(&self) -> Buckets<'_> {
        self.table.buckets()
    }

    /// Suspects linked to `clue`, most recent first.
    pub fn suspects_of<'a>(&'a self, clue: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.table.suspects_of(clue)
    }

    /// The most cited suspect, or `None` if nothing was recorded.
    pub fn top_suspect(&self) -> Option<TopSuspect> {
        self.table.most_cited_suspect()
    }

    /// The clue index.
    pub fn index(&self) -> &ClueIndex {
        &self.index
    }

    /// The association table.
    pub fn table(&self) -> &AssociationTable {
        &self.table
    }

    /// Release both structures. The case file can be reused afterwards.
    pub fn clear(&mut self) {
        tracing::debug!(
            clues = self.index.len(),
            associations = self.table.len(),
            "releasing case file"
        );
        self.index.clear();
        self.table.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseFileError;

    #[test]
    fn test_new_case_file_is_empty() {
        let case = CaseFile::new();
        assert!(case.index().is_empty());
        assert!(case.table().is_empty());
        assert_eq!(case.table().bucket_count(), 10);
        assert_eq!(case.top_suspect(), None);
    }

    #[test]
    fn test_record_routes_by_membership() {
        let mut case = CaseFile::new();
        assert_eq!(case.record("knife", "Green"), Ok(Recorded::NewClue));
        assert_eq!(case.record("knife", "Plum"), Ok(Recorded::KnownClue));
        assert_eq!(case.index().len(), 1);
        assert_eq!(case.table().len(), 2);
    }

    #[test]
    fn test_rejected_record_changes_nothing() {
        let mut case = CaseFile::with_config(CaseFileConfig::new().with_max_name_len(6)).unwrap();
        assert!(matches!(
            case.record("knife", "Mustard"),
            Err(CaseFileError::KeyTooLong {
                field: "suspect",
                len: 7,
                max: 5,
            })
        ));
        assert!(case.index().is_empty());
        assert!(case.table().is_empty());
    }

    #[test]
    fn test_with_config_validates() {
        assert!(CaseFile::with_config(CaseFileConfig::new().with_bucket_count(0)).is_err());
        let case = CaseFile::with_config(CaseFileConfig::new().with_bucket_count(3)).unwrap();
        assert_eq!(case.table().bucket_count(), 3);
    }

    #[test]
    fn test_clear_releases_both() {
        let mut case = CaseFile::new();
        case.record("knife", "Green").unwrap();
        case.clear();
        assert!(!case.find_clue("knife"));
        assert_eq!(case.associations().count(), 0);
        assert_eq!(case.record("knife", "Plum"), Ok(Recorded::NewClue));
    }
}
