//! Service layer for splitsheet
//!
//! The service layer holds the expense-splitting logic: finding where the
//! recorded months end, summing expense rows, computing the balance, and
//! orchestrating a full settlement.

pub mod balance;
pub mod columns;
pub mod settlement;
pub mod summer;

pub use balance::{compute_balance, Balance, Direction};
pub use columns::find_last_column;
pub use settlement::{resolve_month, MonthTotals, Settlement, SettlementService};
pub use summer::{sum_range, ColumnRangeSummer, NonNumericPolicy};
