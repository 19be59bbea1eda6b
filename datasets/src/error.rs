//! Error types of the sample readers
//!

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// A dataset row could not be turned into a typed sample
///
/// Rows are never skipped or coerced, the first failing row ends the read.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed delimited text in line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: expected at least {expected} columns, found {found}")]
    MissingColumns {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column} ({name}): cannot parse {value:?} as {kind}")]
    InvalidField {
        line: u64,
        column: usize,
        name: &'static str,
        value: String,
        kind: &'static str,
    },
}

impl ParseError {
    /// Line of the input (1-based, header included) the error refers to
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::Open { .. } => None,
            ParseError::Csv { line, .. }
            | ParseError::MissingColumns { line, .. }
            | ParseError::InvalidField { line, .. } => Some(*line),
        }
    }
}
