//! Settling the balance for a range of months
//!
//! Ties the pieces together: resolve the start month, fetch the shared
//! spreadsheet, find where the recorded data ends, sum both participants and
//! compute the balance.

use log::{debug, info};
use serde::Serialize;

use super::balance::{compute_balance, Balance};
use super::columns::find_last_column;
use super::summer::ColumnRangeSummer;
use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::models::{Month, MonthColumnMap};
use crate::remote::RemoteStore;
use crate::sheet::{Sheet, Workbook};

/// Both participants' totals for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotals {
    pub month: Month,
    pub total_a: f64,
    pub total_b: f64,
}

/// Result of settling from a start month to the last recorded month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    /// Month the settlement starts from
    pub start: Month,
    /// Months covered, in order; empty if nothing is recorded from `start` on
    pub months: Vec<MonthTotals>,
    pub total_a: f64,
    pub total_b: f64,
    pub balance: Balance,
}

impl Settlement {
    /// Last month included, if any
    pub fn end(&self) -> Option<Month> {
        self.months.last().map(|m| m.month)
    }

    /// One-line reply describing the period and the balance
    pub fn summary(&self) -> String {
        match self.end() {
            None => format!(
                "No expenses recorded from {} onward. {}",
                self.start, self.balance.message
            ),
            Some(end) if end == self.start => format!("{}: {}", self.start, self.balance.message),
            Some(end) => format!("{} to {}: {}", self.start, end, self.balance.message),
        }
    }
}

/// Resolve a month token, or fail with the list of valid tokens
pub fn resolve_month(token: &str) -> SplitResult<Month> {
    Month::parse(token).ok_or_else(|| SplitError::UnrecognizedMonth {
        token: token.trim().to_string(),
        valid: Month::valid_tokens().join(", "),
    })
}

/// Service computing settlements from the shared spreadsheet
pub struct SettlementService<'a> {
    settings: &'a Settings,
    store: &'a dyn RemoteStore,
}

impl<'a> SettlementService<'a> {
    /// Create a new settlement service
    pub fn new(settings: &'a Settings, store: &'a dyn RemoteStore) -> Self {
        Self { settings, store }
    }

    /// Settle from the month named by `month_token` to the last recorded month
    ///
    /// The token is validated before the spreadsheet is fetched.
    pub fn settle(&self, month_token: &str) -> SplitResult<Settlement> {
        let start = resolve_month(month_token)?;
        self.settle_from(start)
    }

    /// Settle from `start` to the last recorded month
    pub fn settle_from(&self, start: Month) -> SplitResult<Settlement> {
        self.settings.validate()?;

        let participants = &self.settings.participants;
        let copy = self.store.fetch(&self.settings.remote.file_id)?;
        let mut workbook = Workbook::open(copy.path())?;
        let sheet_a = workbook.load_sheet(&participants.a.sheet)?;
        let sheet_b = workbook.load_sheet(&participants.b.sheet)?;
        drop(workbook);
        drop(copy);

        self.settle_sheets(start, &sheet_a, &sheet_b)
    }

    /// Settle from `start` using already loaded sheets
    ///
    /// The data ends at whichever sheet has more recorded months. A start
    /// month past the recorded data covers no months and settles as even.
    pub fn settle_sheets<A, B>(
        &self,
        start: Month,
        sheet_a: &A,
        sheet_b: &B,
    ) -> SplitResult<Settlement>
    where
        A: Sheet + ?Sized,
        B: Sheet + ?Sized,
    {
        let layout = &self.settings.layout;
        let map: MonthColumnMap = layout.month_map();
        let start_col = map.column_of(start);

        let first = layout.first_month_column;
        let end_a = find_last_column(sheet_a, layout.header_row, first, layout.scan_end());
        let end_b = find_last_column(sheet_b, layout.header_row, first, layout.scan_end());
        let end_col = end_a.max(end_b);

        if end_col <= start_col {
            info!(
                "No data recorded from {} onward (data ends at column {})",
                start, end_col
            );
        }
        let end_col = end_col.max(start_col);

        let summer = ColumnRangeSummer::new(&layout.expense_rows, self.settings.non_numeric_policy);
        let columns_a = summer.sum_columns(sheet_a, start_col, end_col)?;
        let columns_b = summer.sum_columns(sheet_b, start_col, end_col)?;

        let months: Vec<MonthTotals> = columns_a
            .iter()
            .zip(columns_b.iter())
            .filter_map(|(&(col, total_a), &(_, total_b))| {
                map.month_at(col).map(|month| MonthTotals {
                    month,
                    total_a,
                    total_b,
                })
            })
            .collect();

        let total_a: f64 = months.iter().map(|m| m.total_a).sum();
        let total_b: f64 = months.iter().map(|m| m.total_b).sum();
        let balance = compute_balance(total_a, total_b, &self.settings.participants);

        debug!(
            "Settled {} month(s) from {}: {} = {}, {} = {}",
            months.len(),
            start,
            self.settings.participants.a.name,
            total_a,
            self.settings.participants.b.name,
            total_b
        );

        Ok(Settlement {
            start,
            months,
            total_a,
            total_b,
            balance,
        })
    }
}
