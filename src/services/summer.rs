//! Summing expense rows across month columns

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SplitError, SplitResult};
use crate::models::CellValue;
use crate::sheet::Sheet;

/// What to do with a non-empty cell that is not a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NonNumericPolicy {
    /// Leave the cell out of the total and log a warning (default)
    #[default]
    Skip,
    /// Fail the whole sum with [`SplitError::NonNumericCell`]
    Reject,
}

/// Sums the expense rows of a sheet over a range of columns
#[derive(Debug, Clone, Copy)]
pub struct ColumnRangeSummer<'a> {
    rows: &'a [u32],
    policy: NonNumericPolicy,
}

impl<'a> ColumnRangeSummer<'a> {
    pub fn new(rows: &'a [u32], policy: NonNumericPolicy) -> Self {
        Self { rows, policy }
    }

    /// Sum every numeric cell in `rows` × `[start_col, end_col)`
    ///
    /// An empty range sums to zero. `start_col > end_col` is an error.
    pub fn sum_range<S: Sheet + ?Sized>(
        &self,
        sheet: &S,
        start_col: u32,
        end_col: u32,
    ) -> SplitResult<f64> {
        let columns = self.sum_columns(sheet, start_col, end_col)?;
        Ok(columns.iter().map(|(_, total)| total).sum())
    }

    /// Per-column totals over `[start_col, end_col)`, in column order
    pub fn sum_columns<S: Sheet + ?Sized>(
        &self,
        sheet: &S,
        start_col: u32,
        end_col: u32,
    ) -> SplitResult<Vec<(u32, f64)>> {
        if start_col > end_col {
            return Err(SplitError::InvertedRange {
                start: start_col,
                end: end_col,
            });
        }

        let mut totals = Vec::with_capacity((end_col - start_col) as usize);
        for col in start_col..end_col {
            totals.push((col, self.sum_column(sheet, col)?));
        }

        debug!(
            "Sheet '{}': summed {} rows over columns {}..{}",
            sheet.name(),
            self.rows.len(),
            start_col,
            end_col
        );

        Ok(totals)
    }

    fn sum_column<S: Sheet + ?Sized>(&self, sheet: &S, col: u32) -> SplitResult<f64> {
        let mut total = 0.0;
        for &row in self.rows {
            let value = sheet.cell(row, col);
            if !value.is_truthy() {
                continue;
            }

            match value {
                CellValue::Number(n) => total += n,
                other => match self.policy {
                    NonNumericPolicy::Skip => {
                        warn!(
                            "Skipping non-numeric value '{}' in sheet '{}' at row {}, column {}",
                            other,
                            sheet.name(),
                            row,
                            col
                        );
                    }
                    NonNumericPolicy::Reject => {
                        return Err(SplitError::non_numeric(
                            sheet.name(),
                            row,
                            col,
                            other.to_string(),
                        ));
                    }
                },
            }
        }
        Ok(total)
    }
}

/// Sum `rows` × `[start_col, end_col)` with the given policy
pub fn sum_range<S: Sheet + ?Sized>(
    sheet: &S,
    rows: &[u32],
    start_col: u32,
    end_col: u32,
    policy: NonNumericPolicy,
) -> SplitResult<f64> {
    ColumnRangeSummer::new(rows, policy).sum_range(sheet, start_col, end_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Grid;

    const ROWS: [u32; 4] = [16, 24, 39, 52];

    fn participant_a() -> Grid {
        Grid::new("A")
            .with_row(16, 3, [Some(10.0), Some(0.0), None])
            .with_row(24, 3, [Some(5.0), Some(5.0), Some(5.0)])
            .with_row(39, 3, [Some(0.0), Some(0.0), Some(0.0)])
            .with_row(52, 3, [Some(20.0), Some(0.0), Some(0.0)])
    }

    #[test]
    fn test_scenario_sum() {
        let total = sum_range(&participant_a(), &ROWS, 3, 6, NonNumericPolicy::Skip).unwrap();
        assert_eq!(total, 45.0);
    }

    #[test]
    fn test_empty_range_is_zero() {
        let grid = participant_a();
        for col in 1..20 {
            assert_eq!(sum_range(&grid, &ROWS, col, col, NonNumericPolicy::Reject).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = sum_range(&participant_a(), &ROWS, 6, 3, NonNumericPolicy::Skip);
        assert!(matches!(
            result,
            Err(SplitError::InvertedRange { start: 6, end: 3 })
        ));
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let grid = participant_a();
        let forward = sum_range(&grid, &ROWS, 3, 6, NonNumericPolicy::Skip).unwrap();
        let reversed = sum_range(&grid, &[52, 39, 24, 16], 3, 6, NonNumericPolicy::Skip).unwrap();
        let shuffled = sum_range(&grid, &[24, 52, 16, 39], 3, 6, NonNumericPolicy::Skip).unwrap();
        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_rows_outside_set_are_ignored() {
        let grid = participant_a().with_row(17, 3, [1000.0, 1000.0, 1000.0]);
        assert_eq!(sum_range(&grid, &ROWS, 3, 6, NonNumericPolicy::Skip).unwrap(), 45.0);
    }

    #[test]
    fn test_skip_policy_ignores_text() {
        let mut grid = participant_a();
        grid.set(39, 4, "n/a");
        let total = sum_range(&grid, &ROWS, 3, 6, NonNumericPolicy::Skip).unwrap();
        assert_eq!(total, 45.0);
    }

    #[test]
    fn test_reject_policy_reports_cell() {
        let mut grid = participant_a();
        grid.set(39, 4, "n/a");
        let err = sum_range(&grid, &ROWS, 3, 6, NonNumericPolicy::Reject).unwrap_err();
        match err {
            SplitError::NonNumericCell { sheet, row, column, value } => {
                assert_eq!(sheet, "A");
                assert_eq!(row, 39);
                assert_eq!(column, 4);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_text_is_not_an_error() {
        let mut grid = participant_a();
        grid.set(39, 4, "   ");
        assert_eq!(sum_range(&grid, &ROWS, 3, 6, NonNumericPolicy::Reject).unwrap(), 45.0);
    }

    #[test]
    fn test_negative_values_are_summed() {
        let grid = Grid::new("A").with_row(16, 3, [10.0, -4.5]);
        assert_eq!(sum_range(&grid, &[16], 3, 5, NonNumericPolicy::Skip).unwrap(), 5.5);
    }

    #[test]
    fn test_sum_columns_breakdown() {
        let summer = ColumnRangeSummer::new(&ROWS, NonNumericPolicy::Skip);
        let columns = summer.sum_columns(&participant_a(), 3, 6).unwrap();
        assert_eq!(columns, vec![(3, 35.0), (4, 5.0), (5, 5.0)]);
    }
}
