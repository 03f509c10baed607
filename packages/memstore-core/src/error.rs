//! Database error types.
//!
//! Only the loader and configuration boundary can fail. Table operations are
//! total and treat precondition violations as programming errors.

use thiserror::Error;

/// Database operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// I/O error while reading input rows or configuration
    #[error("I/O error: {0}")]
    IoError(String),

    /// A field could not be parsed as a 32-bit integer
    #[error("Invalid integer '{value}' at line {line}, column {column}")]
    ParseError {
        line: usize,
        column: usize,
        value: String,
    },

    /// Malformed CSV input, such as invalid UTF-8
    #[error("CSV error: {0}")]
    CsvError(String),

    /// A row does not have the same width as the first row
    #[error("Row at line {line} has {got} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// Input contained no data rows and no declared width
    #[error("Input contains no rows")]
    EmptyInput,

    /// Table is too narrow for the fixed query surface
    #[error("Table has {got} columns, queries require at least {required}")]
    TooFewColumns { got: usize, required: usize },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Layout name not recognized
    #[error("Unknown layout '{0}' (expected row, column, aggregated or indexed)")]
    UnknownLayout(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
