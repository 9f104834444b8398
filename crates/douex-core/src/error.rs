//! Error types for the douex-core library.

use thiserror::Error;

/// Main error type for the douex library.
#[derive(Error, Debug)]
pub enum DouexError {
    /// Document-level extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Table recovery error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Failure of the external table-correction collaborator.
    #[error("correction error: {0}")]
    Correction(#[from] CorrectionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised at the scope of a whole run.
///
/// A failed pattern match is never an error; missing identifier fields
/// stay `None` and processing continues. The only run-level condition is
/// producing nothing at all.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No records were produced by the entire run.
    #[error("no gazette data found")]
    NoData,
}

/// Errors describing why a single table was skipped.
///
/// These never abort a document; the table is dropped and logged.
#[derive(Error, Debug)]
pub enum TableError {
    /// Fewer than the minimum rows for a header plus one data row.
    #[error("table has only {0} row(s)")]
    TooFewRows(usize),

    /// The header row produced no usable labels.
    #[error("table has no header labels")]
    ZeroHeaders,

    /// Every candidate data row was empty.
    #[error("table has no data rows")]
    NoDataRows,
}

/// Errors from the optional LLM table-correction collaborator.
#[derive(Error, Debug)]
pub enum CorrectionError {
    /// The collaborator itself failed (network, model, timeout).
    #[error("correction service failed: {0}")]
    Service(String),

    /// The collaborator answered but with text we refuse to parse.
    #[error("unusable correction output: {0}")]
    UnusableOutput(String),
}

/// Result type for the douex library.
pub type Result<T> = std::result::Result<T, DouexError>;
