//! Field splitting and coercion utilities.
//!
//! HMMER tables are deliberately space-delimited and justified into aligned
//! columns, so fields are separated by *runs* of whitespace rather than
//! single tabs. These helpers split a line into its fields and coerce
//! selected tokens into integers with enough context (field name, token,
//! line number) to diagnose bad input.

use crate::error::{Result, TableError};
use std::str::FromStr;

/// Splits a line on runs of whitespace, requiring a minimum field count.
///
/// # Errors
///
/// Returns [`TableError::MalformedRow`] if the line has fewer than
/// `min_fields` whitespace-delimited tokens.
///
/// # Examples
///
/// ```
/// use hmmer_tables::fields::split_fields;
///
/// let fields = split_fields("Globin   1  108", 3, 1)?;
/// assert_eq!(fields, vec!["Globin", "1", "108"]);
/// # Ok::<(), hmmer_tables::TableError>(())
/// ```
pub fn split_fields(line: &str, min_fields: usize, line_number: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < min_fields {
        return Err(TableError::MalformedRow {
            expected: min_fields,
            found: fields.len(),
            line: line_number,
        });
    }

    Ok(fields)
}

/// Parses a required field, reporting the field name and token on failure.
///
/// Used for the integer-typed columns (lengths, ordinals, coordinates).
/// Score-like columns (E-values, scores, biases) are never passed through
/// here: HMMER may emit non-numeric sentinel text in them, so they are kept
/// as raw strings.
///
/// # Errors
///
/// Returns [`TableError::InvalidNumericField`] if the token cannot be
/// parsed as `T`.
///
/// # Examples
///
/// ```
/// use hmmer_tables::fields::parse_required;
///
/// let length: i64 = parse_required("142", "target.length", 1)?;
/// assert_eq!(length, 142);
///
/// let bad = parse_required::<i64>("N/A", "domain.id", 7);
/// assert!(bad.is_err());
/// # Ok::<(), hmmer_tables::TableError>(())
/// ```
pub fn parse_required<T: FromStr>(
    token: &str,
    field: &'static str,
    line_number: usize,
) -> Result<T> {
    token
        .parse()
        .map_err(|_| TableError::InvalidNumericField {
            field,
            token: token.to_string(),
            line: line_number,
        })
}
