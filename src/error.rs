//! Error types for the converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors raised while turning one CSV row into a [`TransactionRecord`].
///
/// [`TransactionRecord`]: crate::record::TransactionRecord
#[derive(Error, Debug)]
pub enum ParseError {
    /// The row does not have the expected number of columns
    #[error("wrong number of columns in record, expected {expected}, got {found}")]
    RowShape { expected: usize, found: usize },

    /// The date column is not a valid `YYYYMMDD` date
    #[error("error parsing date {value:?}: {reason}")]
    Date { value: String, reason: String },

    /// The amount column is not a valid decimal number
    #[error("error parsing amount {value:?}: {source}")]
    Amount {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Errors that end a conversion run. None of them are recoverable.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input file does not exist
    #[error("input file '{}' does not exist", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input file has no content
    #[error("input file '{}' is empty", .path.display())]
    InputEmpty { path: PathBuf },

    /// Failed to inspect or open the input file
    #[error("error opening input file '{}': {source}", .path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output
    #[error("error writing output '{target}': {source}")]
    OutputIo {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer could not read a row
    #[error("line {row} of {file} has an error: {source}")]
    Csv {
        row: usize,
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A row was read but is not a valid transaction
    #[error("line {row} of {file} has an error: {source}")]
    Record {
        row: usize,
        file: String,
        #[source]
        source: ParseError,
    },
}
