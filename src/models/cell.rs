//! Cell values read from the shared spreadsheet

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// Numeric content (integers, floats, dates as serial numbers)
    Number(f64),
    /// Any textual content, including booleans and error codes
    Text(String),
    /// No value in the cell
    #[default]
    Empty,
}

impl CellValue {
    /// Whether the cell contributes to a sum at all
    ///
    /// Empty cells, zero and blank text are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.trim().is_empty(),
            Self::Empty => false,
        }
    }

    /// Whether the cell marks a month without recorded data
    ///
    /// A header cell ends the data when it is empty (or blank text) or reads
    /// as "0".
    pub fn is_blank_or_zero(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0,
            Self::Text(s) => matches!(s.trim(), "" | "0"),
            Self::Empty => true,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Empty => Ok(()),
        }
    }
}
