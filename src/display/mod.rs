//! Display formatting for terminal output
//!
//! Renders settlements and the month table for the CLI.

pub mod months;
pub mod settlement;

pub use months::format_month_table;
pub use settlement::{format_settlement, format_settlement_details};
