//! Spreadsheet access
//!
//! The core only needs to read single cells by position. [`Sheet`] is that
//! capability; [`Grid`] is the in-memory implementation, and [`Workbook`]
//! decodes workbook files into grids.

pub mod grid;
pub mod workbook;

pub use grid::Grid;
pub use workbook::Workbook;

use crate::models::CellValue;

/// Read-only, 1-based cell addressing
pub trait Sheet {
    /// Name of the sheet, used in diagnostics
    fn name(&self) -> &str;

    /// Value at (row, column); absent cells are [`CellValue::Empty`]
    fn cell(&self, row: u32, column: u32) -> CellValue;
}
