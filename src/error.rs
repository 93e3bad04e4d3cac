//! Custom error types for splitsheet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for splitsheet operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The month token has no column in the month table
    #[error("Unrecognized month '{token}'. Valid months: {valid}")]
    UnrecognizedMonth { token: String, valid: String },

    /// The start column lies past the end column
    #[error("Invalid column range: start column {start} is after end column {end}")]
    InvertedRange { start: u32, end: u32 },

    /// A summed cell held something other than a number
    #[error("Non-numeric value '{value}' in sheet '{sheet}' at row {row}, column {column}")]
    NonNumericCell {
        sheet: String,
        row: u32,
        column: u32,
        value: String,
    },

    /// The workbook has no sheet with the configured name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Workbook decoding errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Fetching or persisting the shared spreadsheet failed
    #[error("Could not access the shared spreadsheet: {0}")]
    RemoteAccess(String),
}

impl SplitError {
    /// Create a "non-numeric cell" error
    pub fn non_numeric(sheet: impl Into<String>, row: u32, column: u32, value: impl Into<String>) -> Self {
        Self::NonNumericCell {
            sheet: sheet.into(),
            row,
            column,
            value: value.into(),
        }
    }

    /// Check if this error was caused by bad user input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnrecognizedMonth { .. })
    }

    /// Check if this is a remote access error
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteAccess(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<calamine::Error> for SplitError {
    fn from(err: calamine::Error) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<reqwest::Error> for SplitError {
    fn from(err: reqwest::Error) -> Self {
        Self::RemoteAccess(err.to_string())
    }
}

/// Result type alias for splitsheet operations
pub type SplitResult<T> = Result<T, SplitError>;
