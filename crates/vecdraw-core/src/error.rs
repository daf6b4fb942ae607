//! Error handling for vecdraw
//!
//! Provides the error types shared by every layer of the editor:
//! - Record errors (one malformed line of a drawing file)
//! - Collection errors (index preconditions violated by the caller)
//! - I/O errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Reason a single drawing record could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record has no content
    #[error("empty record")]
    Empty,

    /// The leading tag does not name a known shape
    #[error("unknown shape tag '{0}'")]
    UnknownTag(String),

    /// The record has the wrong number of numeric fields
    #[error("{tag} expects {expected} fields, found {found}")]
    FieldCount {
        /// The shape tag of the record.
        tag: String,
        /// Number of numeric fields the tag requires.
        expected: usize,
        /// Number of numeric fields present.
        found: usize,
    },

    /// A numeric field is not a valid integer
    #[error("field {field} is not an integer: '{value}'")]
    InvalidNumber {
        /// One-based position of the field after the tag.
        field: usize,
        /// The offending text.
        value: String,
    },

    /// The second corner or the extent of the shape does not fit in `i32`
    #[error("{tag} extent overflows the coordinate range")]
    CoordinateOverflow {
        /// The shape tag of the record.
        tag: String,
    },
}

/// Main error type for vecdraw
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// A drawing record could not be parsed
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// One-based line number within the input.
        line: usize,
        /// Why the record was rejected.
        reason: RecordError,
    },

    /// A shape index does not exist in the collection
    #[error("Shape index {index} out of range (collection holds {len} shapes)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Collection length at the time of the call.
        len: usize,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a parse error for a drawing record
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. })
    }

    /// Check if this is a collection precondition violation
    pub fn is_index_error(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
