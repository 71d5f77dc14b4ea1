//! Error types for hmmer-tables

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hmmer-tables operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur when parsing HMMER table formats.
#[derive(Debug, Error)]
pub enum TableError {
    /// A data line has fewer whitespace-delimited fields than the format requires.
    #[error("Malformed row at line {line}: expected at least {expected} fields, got {found}")]
    MalformedRow {
        /// Minimum number of fields the format requires
        expected: usize,
        /// Number of fields found on the line
        found: usize,
        /// Line number where the error occurred (1-based)
        line: usize,
    },

    /// A field expected to hold an integer could not be parsed as one.
    #[error("Invalid numeric field '{field}' at line {line}: cannot parse {token:?}")]
    InvalidNumericField {
        /// Dotted field name (e.g. `domain.id`)
        field: &'static str,
        /// The offending token
        token: String,
        /// Line number where the error occurred (1-based)
        line: usize,
    },

    /// The input path could not be opened.
    ///
    /// Surfaced before any row is produced, so an unreadable file is never
    /// mistaken for a mid-stream read failure.
    #[error("Cannot open {}: {source}", .path.display())]
    FileAccess {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error while reading an already-open stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
