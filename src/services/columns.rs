//! Locating the last recorded month
//!
//! Sheets are appended to month by month. The header row stays blank (or
//! holds "0") for months that have not been filled in yet, so the first such
//! column is the end of the data.

use log::debug;

use crate::sheet::Sheet;

/// Find the first column without data in `header_row`
///
/// Scans `first_col..last_col` in ascending order and returns the first
/// column whose cell is empty or reads as "0". That column is an exclusive
/// upper bound for the recorded months. Returns `last_col` when every
/// scanned column holds data.
pub fn find_last_column<S: Sheet + ?Sized>(
    sheet: &S,
    header_row: u32,
    first_col: u32,
    last_col: u32,
) -> u32 {
    let end = (first_col..last_col)
        .find(|&col| sheet.cell(header_row, col).is_blank_or_zero())
        .unwrap_or(last_col);

    debug!(
        "Sheet '{}': data ends at column {} (scanned {}..{} on row {})",
        sheet.name(),
        end,
        first_col,
        last_col,
        header_row
    );

    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;
    use crate::sheet::Grid;

    #[test]
    fn test_stops_at_zero() {
        let grid = Grid::new("A").with_row(16, 3, [Some(100.0), Some(50.0), Some(0.0), None]);
        assert_eq!(find_last_column(&grid, 16, 3, 14), 5);
    }

    #[test]
    fn test_stops_at_empty() {
        let grid = Grid::new("A").with_row(16, 3, [100.0, 50.0, 25.0]);
        assert_eq!(find_last_column(&grid, 16, 3, 14), 6);
    }

    #[test]
    fn test_stops_at_text_zero() {
        let mut grid = Grid::new("A").with_row(16, 3, [1.0, 2.0]);
        grid.set(16, 5, " 0 ");
        grid.set(16, 6, 3.0);
        assert_eq!(find_last_column(&grid, 16, 3, 14), 5);
    }

    #[test]
    fn test_first_column_empty() {
        let grid = Grid::new("A");
        assert_eq!(find_last_column(&grid, 16, 3, 14), 3);
    }

    #[test]
    fn test_exhaustion_returns_last_col() {
        let grid = Grid::new("A").with_row(16, 3, vec![10.0; 12]);
        assert_eq!(find_last_column(&grid, 16, 3, 14), 14);
        assert_eq!(find_last_column(&grid, 16, 3, 15), 15);
    }

    #[test]
    fn test_text_data_counts_as_data() {
        let mut grid = Grid::new("A");
        grid.set(16, 3, CellValue::Text("paid".into()));
        assert_eq!(find_last_column(&grid, 16, 3, 14), 4);
    }

    #[test]
    fn test_only_header_row_is_scanned() {
        let grid = Grid::new("A")
            .with_row(16, 3, [5.0])
            .with_row(24, 3, vec![1.0; 12]);
        assert_eq!(find_last_column(&grid, 16, 3, 14), 4);
    }
}
