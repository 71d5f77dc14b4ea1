//! Generic space-delimited table parsing.
//!
//! HMMER writes its tabular outputs deliberately space-delimited (rather
//! than tab-delimited) and justified into aligned columns, so they read
//! well for humans and parse on whitespace runs for machines. The tables
//! share common structure:
//! - Fields separated by one or more whitespace characters
//! - Comment lines (starting with `#`) for headers and trailers
//! - One record per data line
//!
//! # Design
//!
//! The [`SpaceDelimitedRecord`] trait defines the interface for parsing
//! records. The [`SpaceDelimitedParser`] provides a generic streaming
//! parser that works with any type implementing this trait, yielding one
//! record at a time with constant memory usage.
//!
//! # Examples
//!
//! ```
//! use hmmer_tables::{SpaceDelimitedRecord, SpaceDelimitedParser, Result};
//! use hmmer_tables::fields::{parse_required, split_fields};
//!
//! // Define a custom record type
//! #[derive(Debug, PartialEq)]
//! struct SimpleRecord {
//!     name: String,
//!     start: i64,
//!     end: i64,
//! }
//!
//! impl SpaceDelimitedRecord for SimpleRecord {
//!     fn from_line(line: &str, line_number: usize) -> Result<Self> {
//!         let fields = split_fields(line, 3, line_number)?;
//!
//!         Ok(SimpleRecord {
//!             name: fields[0].to_string(),
//!             start: parse_required(fields[1], "start", line_number)?,
//!             end: parse_required(fields[2], "end", line_number)?,
//!         })
//!     }
//! }
//!
//! // Parse from string
//! let data = "seq1  100  200\nseq2  300  400\n";
//! let parser = SpaceDelimitedParser::<_, SimpleRecord>::new(data.as_bytes());
//!
//! let records: Vec<_> = parser.collect::<Result<_>>().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].name, "seq1");
//! ```

use crate::error::{Result, TableError};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

/// Trait for types that can be parsed from space-delimited lines.
///
/// Implement this trait to create parsers for space-delimited table
/// formats. The parser hands each record the 1-based number of the line it
/// came from, so malformed input can be reported precisely.
pub trait SpaceDelimitedRecord: Sized {
    /// Parse a record from a space-delimited line.
    ///
    /// The line does not include the trailing newline, and is never empty
    /// or a `#` comment (the parser skips those).
    ///
    /// # Errors
    ///
    /// Returns an error if the line is malformed or contains invalid data.
    fn from_line(line: &str, line_number: usize) -> Result<Self>;
}

/// Generic streaming parser for space-delimited table formats.
///
/// Parses records one at a time with constant memory usage.
/// Automatically skips:
/// - Empty lines
/// - Comment lines (starting with `#`)
///
/// Records are yielded in file order, and parsing stops at the first
/// malformed line: the error is yielded in place of a record.
///
/// # Type Parameters
///
/// - `R`: The underlying reader (anything implementing `Read`)
/// - `T`: The record type (must implement `SpaceDelimitedRecord`)
///
/// # Examples
///
/// ## Parse from file
///
/// ```no_run
/// use hmmer_tables::{SpaceDelimitedParser, DomtblRow, Result};
///
/// # fn main() -> Result<()> {
/// let parser = SpaceDelimitedParser::<_, DomtblRow>::from_path("hits.domtbl")?;
///
/// for record in parser {
///     let record = record?;
///     // Process record
/// }
/// # Ok(())
/// # }
/// ```
///
/// ## Parse from compressed file
///
/// ```no_run
/// # use hmmer_tables::{SpaceDelimitedParser, DomtblRow, Result};
/// # fn main() -> Result<()> {
/// // Gzip input is decompressed transparently
/// let parser = SpaceDelimitedParser::<_, DomtblRow>::from_gzip_path("hits.domtbl.gz")?;
///
/// for record in parser {
///     let record = record?;
///     // Process record
/// }
/// # Ok(())
/// # }
/// ```
pub struct SpaceDelimitedParser<R: Read, T: SpaceDelimitedRecord> {
    reader: BufReader<R>,
    line_buf: String,
    line_number: usize,
    _phantom: PhantomData<T>,
}

impl<R: Read, T: SpaceDelimitedRecord> SpaceDelimitedParser<R, T> {
    /// Creates a new parser from a reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmer_tables::{SpaceDelimitedParser, DomtblRow};
    ///
    /// let data = "# header comment\n";
    /// let parser = SpaceDelimitedParser::<_, DomtblRow>::new(data.as_bytes());
    /// ```
    pub fn new(reader: R) -> Self {
        SpaceDelimitedParser {
            reader: BufReader::new(reader),
            line_buf: String::with_capacity(1024),
            line_number: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the current line number (1-based).
    ///
    /// Useful for error reporting.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<T: SpaceDelimitedRecord> SpaceDelimitedParser<File, T> {
    /// Creates a parser from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::FileAccess`] if the file cannot be opened.
    /// The failure surfaces here, before any row is produced.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<T: SpaceDelimitedRecord> SpaceDelimitedParser<MultiGzDecoder<File>, T> {
    /// Creates a parser from a gzip/bgzip-compressed file.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::FileAccess`] if the file cannot be opened.
    pub fn from_gzip_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let decoder = MultiGzDecoder::new(file);
        Ok(Self::new(decoder))
    }
}

impl<R: Read, T: SpaceDelimitedRecord> Iterator for SpaceDelimitedParser<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buf.clear();

            match self.reader.read_line(&mut self.line_buf) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_number += 1;

                    // Trim trailing newline
                    let line = self.line_buf.trim_end();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Skip comments (lines starting with #)
                    if line.starts_with('#') {
                        continue;
                    }

                    // Parse record
                    return Some(T::from_line(line, self.line_number));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
