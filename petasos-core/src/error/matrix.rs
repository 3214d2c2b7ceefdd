//! Scoring matrix format errors

use thiserror::Error;

/// Distinct ways a BLAST-format scoring matrix can be malformed.
///
/// Each variant is fatal; the parser never coerces a bad table into a usable one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixFormatError {
    /// No column caption line before end of input
    #[error("no column caption line found")]
    MissingHeader,

    #[error("duplicate column caption '{0}'")]
    DuplicateHeader(char),

    #[error("{found} column captions exceed the alphabet bound of {max}")]
    TooManyColumns { found: usize, max: usize },

    #[error("non-numerical entry '{token}' in row '{row}'")]
    NonNumericEntry { row: char, token: String },

    #[error("row '{row}' has {found} values but there are {expected} columns")]
    RowColumnCountMismatch {
        row: char,
        expected: usize,
        found: usize,
    },

    #[error("duplicate row caption '{0}'")]
    DuplicateRowHeader(char),
}
