//! Spreadsheet layout contract
//!
//! Both participants' sheets share one layout: a header row whose cells are
//! filled in as months are recorded, a fixed set of expense rows holding
//! category subtotals, and twelve contiguous month columns.

use serde::{Deserialize, Serialize};

use super::month::MonthColumnMap;
use crate::error::{SplitError, SplitResult};

/// Row and column positions used when reading an expense sheet (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Row scanned to find how many months hold data
    #[serde(default = "default_header_row")]
    pub header_row: u32,

    /// Rows summed for each participant
    #[serde(default = "default_expense_rows")]
    pub expense_rows: Vec<u32>,

    /// Column holding January
    #[serde(default = "default_first_month_column")]
    pub first_month_column: u32,

    /// Column holding December (inclusive)
    #[serde(default = "default_last_month_column")]
    pub last_month_column: u32,
}

fn default_header_row() -> u32 {
    16
}

fn default_expense_rows() -> Vec<u32> {
    vec![16, 24, 39, 52]
}

fn default_first_month_column() -> u32 {
    MonthColumnMap::DEFAULT_FIRST_COLUMN
}

fn default_last_month_column() -> u32 {
    MonthColumnMap::DEFAULT_FIRST_COLUMN + 11
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            header_row: default_header_row(),
            expense_rows: default_expense_rows(),
            first_month_column: default_first_month_column(),
            last_month_column: default_last_month_column(),
        }
    }
}

impl SheetLayout {
    /// Month lookup table for this layout
    pub fn month_map(&self) -> MonthColumnMap {
        MonthColumnMap::new(self.first_month_column)
    }

    /// Exclusive upper bound for the header scan
    ///
    /// One past December, so a fully recorded year includes December.
    pub fn scan_end(&self) -> u32 {
        self.last_month_column + 1
    }

    /// Check the layout is usable
    pub fn validate(&self) -> SplitResult<()> {
        if self.header_row == 0 || self.first_month_column == 0 {
            return Err(SplitError::Config(
                "Rows and columns are 1-based; 0 is not a valid position".into(),
            ));
        }

        if self.expense_rows.is_empty() {
            return Err(SplitError::Config("At least one expense row is required".into()));
        }

        if self.expense_rows.contains(&0) {
            return Err(SplitError::Config("Expense rows are 1-based; 0 is not a valid row".into()));
        }

        if self.last_month_column != self.first_month_column + 11 {
            return Err(SplitError::Config(format!(
                "Month columns must span exactly 12 columns, got {}..={}",
                self.first_month_column, self.last_month_column
            )));
        }

        Ok(())
    }
}
