//! # Casefile
//!
//! An in-memory case file for an investigation: clues are indexed in a
//! binary search tree and every clue → suspect link is kept in a chained
//! hash table, from which the most cited suspect can be tallied.
//!
//! ## Architecture
//!
//! - **Clue Index**: unbalanced BST of distinct clue names, enumerated in
//!   byte-wise order
//! - **Association Table**: fixed number of buckets, each a most-recent-first
//!   chain of (clue, suspect) entries
//! - **Suspect Tally**: per-query count of links per suspect
//! - **Case File**: owns both structures and routes each new record
//! - **Session**: numeric menu loop over any line source
//!
//! ## Example
//!
//! ```
//! use casefile::CaseFile;
//!
//! let mut case = CaseFile::new();
//! case.record("knife", "Green").unwrap();
//! case.record("knife", "Plum").unwrap();
//! case.record("rope", "Green").unwrap();
//!
//! assert!(case.find_clue("knife"));
//! assert!(!case.find_clue("candle"));
//! assert_eq!(case.top_suspect().unwrap().suspect, "Green");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case_file;
pub mod config;
pub mod error;
pub mod hash;
pub mod index;
pub mod session;
pub mod table;
pub mod tally;

// Re-export main types
pub use case_file::{CaseFile, Recorded};
pub use config::{CaseFileConfig, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_NAME_LEN};
pub use error::{CaseFileError, Result};
pub use hash::bucket_index;
pub use index::{ClueIndex, ClueIter};
pub use session::{clean_input, MenuChoice, Prompt, Script, Session};
pub use table::{Association, AssociationTable, Bucket, Buckets, Chain};
pub use tally::{SuspectTally, TopSuspect};

/// Casefile version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
