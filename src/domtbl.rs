//! HMMER per-domain hits table ("domtbl") parser.
//!
//! `hmmscan`/`hmmsearch --domtblout` write one line per domain hit,
//! space-delimited and justified into aligned columns. Header and trailer
//! lines start with `#`.
//!
//! # Format Structure
//!
//! Each data line carries 23 logical fields:
//!
//! 1. **target name** / 2. **target accession** / 3. **tlen**: the target profile
//!    or sequence and its length
//! 4. **query name** / 5. **query accession** / 6. **qlen**: the query and its length
//! 7. **E-value** / 8. **score** / 9. **bias**: full-sequence scores
//! 10. **#** / 11. **of**: domain ordinal (1-based) and domain count for this hit
//! 12. **c-Evalue** / 13. **i-Evalue** / 14. **score** / 15. **bias**: per-domain scores
//! 16. **hmm from** / 17. **hmm to**: coordinates in the profile
//! 18. **ali from** / 19. **ali to**: alignment coordinates in the sequence
//! 20. **env from** / 21. **env to**: envelope coordinates in the sequence
//! 22. **acc**: mean posterior probability of aligned residues
//! 23. **description**: free text, rest of the line
//!
//! All coordinates are 1-based, closed intervals; [`DomtblCoord::interval`]
//! converts them to the 0-based, half-open convention. Score columns are
//! kept as raw strings: HMMER may emit sentinel text in them, and this
//! parser does not interpret scores.
//!
//! # Example
//!
//! ```no_run
//! use hmmer_tables::read_domtbl;
//!
//! # fn main() -> hmmer_tables::Result<()> {
//! for row in read_domtbl("hits.domtbl")? {
//!     println!("{} hits {} at {}",
//!         row.query.name, row.target.name, row.ali_coord.interval());
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::fields::{parse_required, split_fields};
use crate::interval::Interval;
use crate::space_delimited::{SpaceDelimitedParser, SpaceDelimitedRecord};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Target or query identity: name, accession, and length.
///
/// The accession is `-` when the input sequence or profile carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomtblIndex {
    /// Name of the sequence or profile
    pub name: String,
    /// Accession, or `-` if none
    pub accession: String,
    /// Length in residues (sequences) or consensus positions (profiles)
    pub length: i64,
}

/// Full-sequence scores for a hit.
///
/// Kept as raw strings: these columns are numeric-looking but may contain
/// non-numeric sentinel tokens, and this crate does not interpret scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomtblSeqScore {
    /// Full-sequence E-value
    pub e_value: String,
    /// Full-sequence bit score
    pub score: String,
    /// Biased-composition correction
    pub bias: String,
}

/// Per-domain scores for a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomtblDomScore {
    /// Domain ordinal within the hit (1-based, the `#` column)
    pub id: i64,
    /// Total number of domains in the hit (the `of` column)
    pub size: i64,
    /// Conditional E-value
    pub c_value: String,
    /// Independent E-value
    pub i_value: String,
    /// Domain bit score
    pub score: String,
    /// Biased-composition correction
    pub bias: String,
}

/// A coordinate pair as HMMER reports it: 1-based, closed interval.
///
/// `(start, stop)` with `start <= stop` by convention (not enforced).
/// Prefer [`DomtblCoord::interval`] for coordinate arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomtblCoord {
    /// Start coordinate (1-based, inclusive)
    pub start: i64,
    /// Stop coordinate (1-based, inclusive)
    pub stop: i64,
}

impl DomtblCoord {
    /// Returns the 0-based, half-open view of this coordinate pair.
    ///
    /// The conversion is `[start - 1, stop)`, which has the same
    /// cardinality as the original closed interval. Computed on demand;
    /// no bounds validation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmer_tables::DomtblCoord;
    ///
    /// let coord = DomtblCoord { start: 10, stop: 50 };
    /// let interval = coord.interval();
    ///
    /// assert_eq!(interval.start, 9);
    /// assert_eq!(interval.end, 50);
    /// assert_eq!(interval.length(), 41); // == stop - start + 1
    /// ```
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start - 1, self.stop)
    }
}

/// One value of a [`DomtblRow`], for positional access via [`DomtblRow::values`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// An integer-typed field (lengths, ordinals, coordinates)
    Int(i64),
    /// A text field (names, accessions, scores, description)
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// One domain hit: a single data line of a domtbl file.
///
/// Rows are immutable after construction; fields are reachable by name
/// through the nested groups, or positionally through [`DomtblRow::values`].
///
/// # Examples
///
/// ```
/// use hmmer_tables::{DomtblRow, SpaceDelimitedRecord};
///
/// # fn main() -> hmmer_tables::Result<()> {
/// let line = "Globin  PF00042.22  110  sp|P69905|HBA_HUMAN  -  142  1.8e-43  147.4  0.3  \
///             1  1  2e-47  2.2e-43  146.1  0.3  1  108  3  112  3  113  0.97  Globin";
/// let row = DomtblRow::from_line(line, 1)?;
///
/// assert_eq!(row.target.name, "Globin");
/// assert_eq!(row.query.length, 142);
/// assert_eq!(row.domain.id, 1);
/// assert_eq!(row.hmm_coord.interval().length(), 108);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomtblRow {
    /// Target identity (the profile for `hmmscan`, the sequence for `hmmsearch`)
    pub target: DomtblIndex,
    /// Query identity
    pub query: DomtblIndex,
    /// Full-sequence scores
    pub full_sequence: DomtblSeqScore,
    /// Per-domain scores
    pub domain: DomtblDomScore,
    /// Coordinates within the profile
    pub hmm_coord: DomtblCoord,
    /// Alignment coordinates within the sequence
    pub ali_coord: DomtblCoord,
    /// Envelope coordinates within the sequence
    pub env_coord: DomtblCoord,
    /// Mean posterior probability of aligned residues
    pub acc: String,
    /// Free-text description of the target
    pub description: String,
}

impl DomtblRow {
    /// Field names in positional order, matching [`DomtblRow::values`].
    pub const FIELD_NAMES: [&'static str; 23] = [
        "target.name",
        "target.accession",
        "target.length",
        "query.name",
        "query.accession",
        "query.length",
        "full_sequence.e_value",
        "full_sequence.score",
        "full_sequence.bias",
        "domain.id",
        "domain.size",
        "domain.c_value",
        "domain.i_value",
        "domain.score",
        "domain.bias",
        "hmm_coord.start",
        "hmm_coord.stop",
        "ali_coord.start",
        "ali_coord.stop",
        "env_coord.start",
        "env_coord.stop",
        "acc",
        "description",
    ];

    /// Returns the row's 23 values in fixed positional order.
    ///
    /// The order matches the column layout of the file and
    /// [`DomtblRow::FIELD_NAMES`], supporting tuple-like consumption
    /// without reflection.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmer_tables::{DomtblRow, FieldValue, SpaceDelimitedRecord};
    ///
    /// # fn main() -> hmmer_tables::Result<()> {
    /// let line = "Globin  PF00042.22  110  sp|P69905|HBA_HUMAN  -  142  1.8e-43  147.4  0.3  \
    ///             1  1  2e-47  2.2e-43  146.1  0.3  1  108  3  112  3  113  0.97  Globin";
    /// let row = DomtblRow::from_line(line, 1)?;
    ///
    /// let values = row.values();
    /// assert_eq!(values.len(), DomtblRow::FIELD_NAMES.len());
    /// assert_eq!(values[0], FieldValue::Text("Globin"));
    /// assert_eq!(values[2], FieldValue::Int(110));
    /// # Ok(())
    /// # }
    /// ```
    pub fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Text(&self.target.name),
            FieldValue::Text(&self.target.accession),
            FieldValue::Int(self.target.length),
            FieldValue::Text(&self.query.name),
            FieldValue::Text(&self.query.accession),
            FieldValue::Int(self.query.length),
            FieldValue::Text(&self.full_sequence.e_value),
            FieldValue::Text(&self.full_sequence.score),
            FieldValue::Text(&self.full_sequence.bias),
            FieldValue::Int(self.domain.id),
            FieldValue::Int(self.domain.size),
            FieldValue::Text(&self.domain.c_value),
            FieldValue::Text(&self.domain.i_value),
            FieldValue::Text(&self.domain.score),
            FieldValue::Text(&self.domain.bias),
            FieldValue::Int(self.hmm_coord.start),
            FieldValue::Int(self.hmm_coord.stop),
            FieldValue::Int(self.ali_coord.start),
            FieldValue::Int(self.ali_coord.stop),
            FieldValue::Int(self.env_coord.start),
            FieldValue::Int(self.env_coord.stop),
            FieldValue::Text(&self.acc),
            FieldValue::Text(&self.description),
        ]
    }
}

impl SpaceDelimitedRecord for DomtblRow {
    fn from_line(line: &str, line_number: usize) -> Result<Self> {
        // 22 atomic fields minimum; the description may be empty
        let x = split_fields(line, 22, line_number)?;

        Ok(DomtblRow {
            target: DomtblIndex {
                name: x[0].to_string(),
                accession: x[1].to_string(),
                length: parse_required(x[2], "target.length", line_number)?,
            },
            query: DomtblIndex {
                name: x[3].to_string(),
                accession: x[4].to_string(),
                length: parse_required(x[5], "query.length", line_number)?,
            },
            full_sequence: DomtblSeqScore {
                e_value: x[6].to_string(),
                score: x[7].to_string(),
                bias: x[8].to_string(),
            },
            domain: DomtblDomScore {
                id: parse_required(x[9], "domain.id", line_number)?,
                size: parse_required(x[10], "domain.size", line_number)?,
                c_value: x[11].to_string(),
                i_value: x[12].to_string(),
                score: x[13].to_string(),
                bias: x[14].to_string(),
            },
            hmm_coord: DomtblCoord {
                start: parse_required(x[15], "hmm_coord.start", line_number)?,
                stop: parse_required(x[16], "hmm_coord.stop", line_number)?,
            },
            ali_coord: DomtblCoord {
                start: parse_required(x[17], "ali_coord.start", line_number)?,
                stop: parse_required(x[18], "ali_coord.stop", line_number)?,
            },
            env_coord: DomtblCoord {
                start: parse_required(x[19], "env_coord.start", line_number)?,
                stop: parse_required(x[20], "env_coord.stop", line_number)?,
            },
            acc: x[21].to_string(),
            // Free text; internal whitespace runs collapse to single spaces
            description: x[22..].join(" "),
        })
    }
}

/// Streaming domtbl parser.
///
/// Reads domain hits one at a time with constant memory usage, skipping
/// `#` header/trailer lines and blank lines.
///
/// # Example
///
/// ```no_run
/// use hmmer_tables::DomtblReader;
///
/// # fn main() -> hmmer_tables::Result<()> {
/// let reader = DomtblReader::from_path("hits.domtbl")?;
/// for row in reader {
///     let row = row?;
///     println!("{} domain {}/{}", row.target.name, row.domain.id, row.domain.size);
/// }
/// # Ok(())
/// # }
/// ```
pub type DomtblReader<R> = SpaceDelimitedParser<R, DomtblRow>;

/// Reads a domtbl file into an ordered sequence of rows.
///
/// Rows appear in file order. The parse is all-or-nothing: the first
/// malformed line fails the whole call.
///
/// # Errors
///
/// - [`TableError::FileAccess`](crate::TableError::FileAccess) if the path
///   cannot be opened (no rows are produced)
/// - [`TableError::MalformedRow`](crate::TableError::MalformedRow) /
///   [`TableError::InvalidNumericField`](crate::TableError::InvalidNumericField)
///   on the first bad data line
///
/// # Examples
///
/// ```no_run
/// use hmmer_tables::read_domtbl;
///
/// # fn main() -> hmmer_tables::Result<()> {
/// let rows = read_domtbl("hits.domtbl")?;
/// println!("{} domain hits", rows.len());
/// # Ok(())
/// # }
/// ```
pub fn read_domtbl(path: impl AsRef<Path>) -> Result<Vec<DomtblRow>> {
    DomtblReader::from_path(path)?.collect()
}

/// Reads domtbl rows from an already-open stream.
///
/// Same contract as [`read_domtbl`], for callers that hold a reader
/// rather than a path (sockets, decompressors, in-memory buffers).
///
/// # Examples
///
/// ```
/// use hmmer_tables::read_domtbl_from;
///
/// # fn main() -> hmmer_tables::Result<()> {
/// let data = "Globin  PF00042.22  110  sp|P69905|HBA_HUMAN  -  142  1.8e-43  147.4  0.3  \
///             1  1  2e-47  2.2e-43  146.1  0.3  1  108  3  112  3  113  0.97  Globin\n";
/// let rows = read_domtbl_from(data.as_bytes())?;
/// assert_eq!(rows.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn read_domtbl_from<R: Read>(reader: R) -> Result<Vec<DomtblRow>> {
    DomtblReader::new(reader).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    const LINE: &str = "sp|P1 ACC1 100 sp|Q1 ACC2 200 1e-10 50.0 0.5 1 1 1e-12 1e-11 48.0 0.3 10 50 12 48 1 60 0.95 Example description here";

    #[test]
    fn test_parse_single_row() {
        let row = DomtblRow::from_line(LINE, 1).unwrap();

        assert_eq!(
            row.target,
            DomtblIndex {
                name: "sp|P1".to_string(),
                accession: "ACC1".to_string(),
                length: 100,
            }
        );
        assert_eq!(
            row.query,
            DomtblIndex {
                name: "sp|Q1".to_string(),
                accession: "ACC2".to_string(),
                length: 200,
            }
        );
        assert_eq!(row.full_sequence.e_value, "1e-10");
        assert_eq!(row.full_sequence.score, "50.0");
        assert_eq!(row.full_sequence.bias, "0.5");
        assert_eq!(row.domain.id, 1);
        assert_eq!(row.domain.size, 1);
        assert_eq!(row.domain.c_value, "1e-12");
        assert_eq!(row.domain.i_value, "1e-11");
        assert_eq!(row.domain.score, "48.0");
        assert_eq!(row.domain.bias, "0.3");
        assert_eq!(row.hmm_coord, DomtblCoord { start: 10, stop: 50 });
        assert_eq!(row.ali_coord, DomtblCoord { start: 12, stop: 48 });
        assert_eq!(row.env_coord, DomtblCoord { start: 1, stop: 60 });
        assert_eq!(row.acc, "0.95");
        assert_eq!(row.description, "Example description here");
    }

    #[test]
    fn test_coordinate_intervals() {
        let row = DomtblRow::from_line(LINE, 1).unwrap();

        assert_eq!(row.hmm_coord.interval(), Interval::new(9, 50));
        assert_eq!(row.ali_coord.interval(), Interval::new(11, 48));
        assert_eq!(row.env_coord.interval(), Interval::new(0, 60));

        // Half-open length equals the closed interval's cardinality
        assert_eq!(row.hmm_coord.interval().length(), 50 - 10 + 1);
    }

    #[test]
    fn test_description_whitespace_collapses() {
        let line = LINE.replace("Example description here", "Example   description\t here");
        let row = DomtblRow::from_line(&line, 1).unwrap();
        assert_eq!(row.description, "Example description here");
    }

    #[test]
    fn test_empty_description() {
        // Exactly 22 fields: the description may legitimately be absent
        let line = LINE.rsplitn(4, ' ').last().unwrap().trim_end();
        let row = DomtblRow::from_line(line, 1).unwrap();
        assert_eq!(row.acc, "0.95");
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_too_few_fields() {
        let err = DomtblRow::from_line("a b c d e f g h i j", 4).unwrap_err();
        match err {
            TableError::MalformedRow {
                expected,
                found,
                line,
            } => {
                assert_eq!(expected, 22);
                assert_eq!(found, 10);
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_domain_id() {
        let line = LINE.replacen(" 1 1 1e-12", " N/A 1 1e-12", 1);
        let err = DomtblRow::from_line(&line, 7).unwrap_err();
        match err {
            TableError::InvalidNumericField { field, token, line } => {
                assert_eq!(field, "domain.id");
                assert_eq!(token, "N/A");
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_score_fields_keep_sentinel_text() {
        // Score-like columns pass through uncoerced, including '-'
        let line = LINE.replace("1e-10 50.0 0.5", "- - -");
        let row = DomtblRow::from_line(&line, 1).unwrap();
        assert_eq!(row.full_sequence.e_value, "-");
        assert_eq!(row.full_sequence.score, "-");
        assert_eq!(row.full_sequence.bias, "-");
    }

    #[test]
    fn test_values_matches_field_names() {
        let row = DomtblRow::from_line(LINE, 1).unwrap();
        let values = row.values();

        assert_eq!(values.len(), DomtblRow::FIELD_NAMES.len());
        assert_eq!(values[0], FieldValue::Text("sp|P1"));
        assert_eq!(values[2], FieldValue::Int(100));
        assert_eq!(values[9], FieldValue::Int(1));
        assert_eq!(values[15], FieldValue::Int(10));
        assert_eq!(values[21], FieldValue::Text("0.95"));
        assert_eq!(values[22], FieldValue::Text("Example description here"));

        assert_eq!(DomtblRow::FIELD_NAMES[9], "domain.id");
        assert_eq!(DomtblRow::FIELD_NAMES[22], "description");
    }

    #[test]
    fn test_read_preserves_order_and_skips_comments() {
        let data = format!(
            "# target name ...\n#---\n{}\n\n{}\n# [ok]\n",
            LINE.replace("sp|P1", "first"),
            LINE.replace("sp|P1", "second"),
        );

        let rows = read_domtbl_from(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].target.name, "first");
        assert_eq!(rows[1].target.name, "second");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let data = format!("{LINE}\n{LINE}\n");

        let first = read_domtbl_from(data.as_bytes()).unwrap();
        let second = read_domtbl_from(data.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_domtbl_missing_path() {
        let err = read_domtbl("no/such/file.domtbl").unwrap_err();
        assert!(matches!(err, TableError::FileAccess { .. }));
    }

    #[test]
    fn test_fails_at_first_bad_line() {
        let bad = LINE.replacen(" 100 ", " wide ", 1);
        let data = format!("{LINE}\n{bad}\n{LINE}\n");

        let err = read_domtbl_from(data.as_bytes()).unwrap_err();
        match err {
            TableError::InvalidNumericField { field, line, .. } => {
                assert_eq!(field, "target.length");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
