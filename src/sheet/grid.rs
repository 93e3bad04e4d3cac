//! Sparse in-memory sheet

use std::collections::HashMap;

use super::Sheet;
use crate::models::CellValue;

/// A named sheet holding only its non-empty cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    name: String,
    cells: HashMap<(u32, u32), CellValue>,
}

impl Grid {
    /// Create an empty sheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    /// Set a single cell; setting `Empty` removes it
    pub fn set(&mut self, row: u32, column: u32, value: impl Into<CellValue>) {
        match value.into() {
            CellValue::Empty => {
                self.cells.remove(&(row, column));
            }
            value => {
                self.cells.insert((row, column), value);
            }
        }
    }

    /// Fill consecutive cells of a row starting at `first_column`
    pub fn with_row<I, V>(mut self, row: u32, first_column: u32, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for (offset, value) in values.into_iter().enumerate() {
            self.set(row, first_column + offset as u32, value);
        }
        self
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Sheet for Grid {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell(&self, row: u32, column: u32) -> CellValue {
        self.cells.get(&(row, column)).cloned().unwrap_or_default()
    }
}
