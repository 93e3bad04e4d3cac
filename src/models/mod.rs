//! Core data models for splitsheet
//!
//! This module contains the data structures for the expense-splitting
//! domain: cell values, months, the sheet layout, participants and money.

pub mod cell;
pub mod layout;
pub mod money;
pub mod month;
pub mod participant;

pub use cell::CellValue;
pub use layout::SheetLayout;
pub use money::Money;
pub use month::{Month, MonthColumnMap};
pub use participant::{Participant, Participants};
