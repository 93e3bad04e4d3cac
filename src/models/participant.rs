//! The two people sharing expenses

use serde::{Deserialize, Serialize};

/// One person, and the sheet their expenses are recorded on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Name used in replies
    pub name: String,
    /// Worksheet name in the shared workbook
    pub sheet: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, sheet: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheet: sheet.into(),
        }
    }
}

/// The pair of participants, in balance order
///
/// Balances are computed as `a - b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    pub a: Participant,
    pub b: Participant,
}

impl Participants {
    pub fn new(a: Participant, b: Participant) -> Self {
        Self { a, b }
    }
}

impl Default for Participants {
    fn default() -> Self {
        Self {
            a: Participant::new("A", "Expenses A"),
            b: Participant::new("B", "Expenses B"),
        }
    }
}
