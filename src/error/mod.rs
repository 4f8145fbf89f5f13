//! Error handling for phenopacket entry.

pub mod util;

use arrow_schema::ArrowError;
use rust_xlsxwriter::XlsxError;
use std::io;

/// Specialized error type for record entry and export
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// The text does not name a known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A row carries a field the category does not declare
    #[error("Field {field} is not declared for {category}")]
    UnknownField {
        /// Category label
        category: &'static str,
        /// Offending field name
        field: String,
    },

    /// A row lacks a field the category declares
    #[error("Field {field} is missing for {category}")]
    MissingField {
        /// Category label
        category: &'static str,
        /// Missing field name
        field: &'static str,
    },

    /// An enumerated field holds a value outside its choice list
    #[error("Value {value:?} is not a valid choice for {category}.{field} (expected one of: {choices})")]
    InvalidChoice {
        /// Category label
        category: &'static str,
        /// Field name
        field: &'static str,
        /// Rejected value
        value: String,
        /// Allowed values, comma separated
        choices: String,
    },

    /// A typed field holds a malformed value
    #[error("Value {value:?} is not valid for {category}.{field}: {reason}")]
    InvalidValue {
        /// Category label
        category: &'static str,
        /// Field name
        field: &'static str,
        /// Rejected value
        value: String,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// A row was submitted to a category other than its own
    #[error("Row of {found} cannot be appended to {expected}")]
    CategoryMismatch {
        /// Category the row was submitted to
        expected: &'static str,
        /// Category the row was built for
        found: &'static str,
    },

    /// A row index outside the category's current range
    #[error("Row index {index} is out of range for {category} ({len} rows)")]
    IndexOutOfRange {
        /// Category label
        category: &'static str,
        /// Requested index
        index: usize,
        /// Current row count
        len: usize,
    },

    /// A console command could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Error building or serializing an Arrow table
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error writing the spreadsheet workbook
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Error reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error merging or extracting layered configuration
    #[error("Invalid configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Error with configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for phenopacket entry operations
pub type Result<T> = std::result::Result<T, EntryError>;
