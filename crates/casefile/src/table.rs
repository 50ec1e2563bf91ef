//! Association table: clue → suspect links in fixed buckets with chaining
//!
//! Every bucket is a singly linked chain threaded through one shared entry
//! arena. New entries are prepended, so a chain reads most-recent-first.

use crate::error::{try_copy, CaseFileError, Result};
use crate::hash::bucket_index;

/// Position of an entry in the table arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryId(usize);

#[derive(Debug, Clone)]
struct AssociationEntry {
    clue: String,
    suspect: String,
    next: Option<EntryId>,
}

/// One clue → suspect link, borrowed from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Association<'a> {
    /// The clue the suspect was linked to
    pub clue: &'a str,

    /// The linked suspect
    pub suspect: &'a str,
}

/// Fixed-size hash table mapping clues to every suspect ever linked to them.
///
/// Duplicate (clue, suspect) pairs are kept: linking the same suspect to
/// the same clue twice records two entries.
///
/// # Example
///
/// ```
/// use casefile::AssociationTable;
///
/// let mut table = AssociationTable::with_buckets(10).unwrap();
/// table.insert("knife", "Green").unwrap();
/// table.insert("knife", "Plum").unwrap();
///
/// // most recent first
/// assert_eq!(table.suspects_of("knife").collect::<Vec<_>>(), vec!["Plum", "Green"]);
/// ```
#[derive(Debug, Clone)]
pub struct AssociationTable {
    heads: Vec<Option<EntryId>>,
    entries: Vec<AssociationEntry>,
}

impl AssociationTable {
    /// Create an empty table with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if `bucket_count` is zero
    /// - `AllocationFailed` if the bucket array cannot be reserved
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(CaseFileError::InvalidConfig(
                "bucket count must be at least 1".to_string(),
            ));
        }

        let mut heads = Vec::new();
        heads
            .try_reserve_exact(bucket_count)
            .map_err(CaseFileError::allocation("bucket array"))?;
        heads.resize(bucket_count, None);

        Ok(Self {
            heads,
            entries: Vec::new(),
        })
    }

    /// Link `suspect` to `clue` at the head of the clue's bucket.
    ///
    /// Always records a new entry; no existence check is made.
    ///
    /// # Errors
    ///
    /// `AllocationFailed` if the entry or its strings cannot be stored. The
    /// table is unchanged in that case.
    pub fn insert(&mut self, clue: &str, suspect: &str) -> Result<()> {
        let bucket = self.bucket_of(clue);
        let clue_copy = try_copy(clue, "association clue")?;
        let suspect_copy = try_copy(suspect, "association suspect")?;
        self.entries
            .try_reserve(1)
            .map_err(CaseFileError::allocation("association entry"))?;

        let id = EntryId(self.entries.len());
        self.entries.push(AssociationEntry {
            clue: clue_copy,
            suspect: suspect_copy,
            next: self.heads[bucket],
        });
        self.heads[bucket] = Some(id);

        tracing::trace!(clue, suspect, bucket, "linked suspect");
        Ok(())
    }

    /// Bucket that holds (or would hold) entries for `clue`.
    pub fn bucket_of(&self, clue: &str) -> usize {
        bucket_index(clue, self.heads.len())
    }

    /// Walk every non-empty bucket in ascending index order.
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets {
            table: self,
            next_index: 0,
        }
    }

    /// Walk every association: buckets in ascending order, each chain
    /// head to tail.
    pub fn iter(&self) -> impl Iterator<Item = Association<'_>> + '_ {
        self.buckets().flat_map(|bucket| bucket.iter())
    }

    /// Suspects linked to `clue`, most recent first.
    pub fn suspects_of<'a>(&'a self, clue: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        Chain {
            table: self,
            cursor: self.heads[self.bucket_of(clue)],
        }
        .filter(move |association| association.clue == clue)
        .map(|association| association.suspect)
    }

    /// Number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every entry and reset every bucket to empty.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heads.iter_mut().for_each(|head| *head = None);
    }
}

/// A non-empty bucket of an [`AssociationTable`].
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    index: usize,
    table: &'a AssociationTable,
    head: EntryId,
}

impl<'a> Bucket<'a> {
    /// Position of this bucket in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Entries of this bucket, most recent first.
    pub fn iter(&self) -> Chain<'a> {
        Chain {
            table: self.table,
            cursor: Some(self.head),
        }
    }
}

impl<'a> IntoIterator for Bucket<'a> {
    type Item = Association<'a>;
    type IntoIter = Chain<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the non-empty buckets of an [`AssociationTable`].
#[derive(Debug, Clone)]
pub struct Buckets<'a> {
    table: &'a AssociationTable,
    next_index: usize,
}

impl<'a> Iterator for Buckets<'a> {
    type Item = Bucket<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < self.table.heads.len() {
            let index = self.next_index;
            self.next_index += 1;
            if let Some(head) = self.table.heads[index] {
                return Some(Bucket {
                    index,
                    table: self.table,
                    head,
                });
            }
        }
        None
    }
}

/// Iterator following one bucket chain from head to tail.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    table: &'a AssociationTable,
    cursor: Option<EntryId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = Association<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = &self.table.entries[id.0];
        self.cursor = entry.next;
        Some(Association {
            clue: &entry.clue,
            suspect: &entry.suspect,
        })
    }
}
