//! Error types for the cobalt codec.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the codec library.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Lookup was asked for an empty word
    #[error("Empty word")]
    EmptyWord,

    /// Word is not present in the dictionary
    #[error("Word not found: {0}")]
    WordNotFound(String),

    /// Encoder was given no sentence at all
    #[error("No sentence given")]
    NullInput,

    /// A buffer could not be grown while encoding
    #[error("Allocation failure while encoding")]
    AllocationFailure,

    /// A token carries a NUL byte and cannot be stored as a null-terminated literal
    #[error("Token contains a NUL byte at position {position}")]
    InteriorNul { position: usize },

    /// Sentence exceeds the configured size limit
    #[error("Sentence too long: {len} bytes (max: {max})")]
    SentenceTooLong { len: usize, max: usize },

    /// Word table, word map or guide table violates an invariant
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Too many words for 16-bit ordinals
    #[error("Word table size exceeded maximum of {max} (tried to add {tried})")]
    TableOverflow { max: usize, tried: usize },

    /// Encoded data does not follow the wire format
    #[error("Malformed stream at byte {offset}: {reason}")]
    MalformedStream { offset: usize, reason: String },

    /// Stream references an ordinal outside the dictionary
    #[error("Unknown ordinal: {0}")]
    UnknownOrdinal(u16),

    /// Error loading tables
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving tables
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}

impl CodecError {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedStream {
            offset,
            reason: reason.into(),
        }
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
