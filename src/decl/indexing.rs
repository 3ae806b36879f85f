//! Indexing
//!
//!     The model is assembled from indexer records: flat descriptions of every declaration in a
//!     file (its kind, name, byte ranges, documentation comment, substructure). Producing those
//!     records is the job of a source indexer, which this crate talks to through the
//!     [SourceIndexer] trait.
//!
//!     Two indexers are provided:
//!
//!         - [JsonIndex] reads a JSON dump in the SourceKit layout (`key.kind`, `key.offset`, ...)
//!           produced by an external tool.
//!         - [VerseIndexer] understands the canonical layout written by
//!           [verse](crate::decl::verse), so rendered output can be read back without any
//!           external tool. It is not a general source parser.

pub mod json;
pub mod kinds;
pub mod record;
pub mod verse_indexer;

pub use json::JsonIndex;
pub use kinds::DeclarationKind;
pub use record::{IndexedRecord, InheritedType};
pub use verse_indexer::VerseIndexer;

use std::fmt;

/// Error produced while indexing a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The index dump is not valid JSON for indexer records
    Malformed(String),
    /// Valid JSON, but neither a record nor a list of records
    UnexpectedShape(String),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Malformed(msg) => write!(f, "Malformed index: {msg}"),
            IndexError::UnexpectedShape(found) => {
                write!(f, "Unexpected index shape: expected object or array, found {found}")
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Something that can describe the declarations of a source text
pub trait SourceIndexer {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Top-level records of `source`, in source order
    fn index(&self, source: &str) -> Result<Vec<IndexedRecord>, IndexError>;
}
