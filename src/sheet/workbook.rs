//! Workbook decoding backed by calamine
//!
//! Any format calamine auto-detects (`.xlsx`, `.xlsm`, `.xls`, `.ods`) is
//! accepted. Sheets are copied into [`Grid`]s so the file can be discarded
//! as soon as the values are read.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use log::debug;

use super::Grid;
use crate::error::{SplitError, SplitResult};
use crate::models::CellValue;

/// An open workbook file
pub struct Workbook {
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook from disk
    pub fn open(path: impl AsRef<Path>) -> SplitResult<Self> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|e| {
            SplitError::Spreadsheet(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Ok(Self { sheets })
    }

    /// Names of all worksheets, in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Load a named worksheet into memory
    pub fn load_sheet(&mut self, name: &str) -> SplitResult<Grid> {
        if !self.sheet_names().iter().any(|n| n == name) {
            return Err(SplitError::SheetNotFound(name.to_string()));
        }

        let range = self.sheets.worksheet_range(name)?;
        let (start_row, start_col) = range.start().unwrap_or((0, 0));

        let mut grid = Grid::new(name);
        for (row, col, value) in range.used_cells() {
            // used_cells() is relative to range.start(); Grid is absolute and 1-based.
            let row = start_row + row as u32 + 1;
            let col = start_col + col as u32 + 1;
            grid.set(row, col, convert_value(value));
        }

        debug!("Loaded sheet '{}' with {} cells", name, grid.len());
        Ok(grid)
    }
}

fn convert_value(value: &Data) -> CellValue {
    match value {
        Data::Empty => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::DateTime(v) => CellValue::Number(v.as_f64()),
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Bool(v) => CellValue::Text(if *v { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::DateTimeIso(v) | Data::DurationIso(v) => CellValue::Text(v.clone()),
    }
}
