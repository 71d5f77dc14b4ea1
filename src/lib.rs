//! hmmer-tables: streaming parsers for HMMER's tabular output files
//!
//! # Overview
//!
//! HMMER's per-domain hits table (`hmmscan`/`hmmsearch --domtblout`) is
//! space-delimited text, one domain hit per line, justified into aligned
//! columns. This crate parses it into strongly-typed rows with precise
//! error reporting (field name, offending token, line number), and exposes
//! a half-open, 0-based interval view of HMMER's 1-based closed
//! coordinates.
//!
//! ## Key Features
//!
//! - **Streaming**: constant memory regardless of table size
//! - **Typed rows**: lengths, ordinals, and coordinates as integers;
//!   score columns preserved as raw text
//! - **Coordinate arithmetic**: `[start-1, stop)` intervals with
//!   length/overlap/containment helpers
//! - **Compression support**: transparent gzip decompression
//!
//! ## Quick Start
//!
//! ```no_run
//! use hmmer_tables::read_domtbl;
//!
//! # fn main() -> hmmer_tables::Result<()> {
//! // Eager: the whole table, in file order, all-or-nothing
//! let rows = read_domtbl("hits.domtbl")?;
//!
//! for row in &rows {
//!     let span = row.env_coord.interval();
//!     println!("{}: domain {}/{} covering {}",
//!         row.target.name, row.domain.id, row.domain.size, span);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or stream rows one at a time:
//!
//! ```no_run
//! use hmmer_tables::DomtblReader;
//!
//! # fn main() -> hmmer_tables::Result<()> {
//! for row in DomtblReader::from_path("hits.domtbl")? {
//!     let row = row?;
//!     // Process one row at a time
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`domtbl`]: the per-domain hits table row model and entry points
//! - [`space_delimited`]: generic streaming infrastructure for
//!   space-delimited tables
//! - [`fields`]: field splitting and coercion utilities
//! - [`interval`]: 0-based half-open interval type
//! - [`error`]: error taxonomy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod domtbl;
pub mod error;
pub mod fields;
pub mod interval;
pub mod space_delimited;

// Re-export commonly used types
pub use domtbl::{
    read_domtbl, read_domtbl_from, DomtblCoord, DomtblDomScore, DomtblIndex, DomtblReader,
    DomtblRow, DomtblSeqScore, FieldValue,
};
pub use error::{Result, TableError};
pub use interval::Interval;
pub use space_delimited::{SpaceDelimitedParser, SpaceDelimitedRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
