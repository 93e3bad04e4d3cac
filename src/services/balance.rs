//! Net balance between the two participants

use serde::Serialize;

use crate::models::{Money, Participants};

/// Who owes whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// B owes A
    BOwesA,
    /// A owes B
    AOwesB,
    /// Nobody owes anything
    Even,
}

/// The settled balance and its human-readable statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// `total_a - total_b`, rounded to cents
    pub amount: Money,
    pub direction: Direction,
    pub message: String,
}

impl Balance {
    /// Amount owed by whichever participant is the debtor
    pub fn owed(&self) -> Money {
        self.amount.abs()
    }
}

/// Compare two participant totals and state who owes whom
///
/// The difference is rounded to cents with [`Money::from_amount`] before the
/// direction is decided, so differences under half a cent settle as even.
pub fn compute_balance(total_a: f64, total_b: f64, participants: &Participants) -> Balance {
    let amount = Money::from_amount(total_a - total_b);
    let a = &participants.a.name;
    let b = &participants.b.name;

    let (direction, message) = if amount.is_zero() {
        (
            Direction::Even,
            format!("{} and {} are even, no one owes anything", a, b),
        )
    } else if amount.is_positive() {
        (Direction::BOwesA, format!("{} owes {} {}", b, a, amount))
    } else {
        (Direction::AOwesB, format!("{} owes {} {}", a, b, amount.abs()))
    };

    Balance {
        amount,
        direction,
        message,
    }
}
