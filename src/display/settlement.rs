//! Settlement formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::models::{Money, Participants};
use crate::services::Settlement;

/// Single-line reply for a settlement
pub fn format_settlement(settlement: &Settlement) -> String {
    settlement.summary()
}

/// Per-month breakdown followed by the summary line
pub fn format_settlement_details(settlement: &Settlement, participants: &Participants) -> String {
    if settlement.months.is_empty() {
        return settlement.summary();
    }

    let mut builder = Builder::default();
    builder.push_record([
        "Month".to_string(),
        participants.a.name.clone(),
        participants.b.name.clone(),
    ]);

    for month in &settlement.months {
        builder.push_record([
            month.month.to_string(),
            Money::from_amount(month.total_a).to_string(),
            Money::from_amount(month.total_b).to_string(),
        ]);
    }

    builder.push_record([
        "Total".to_string(),
        Money::from_amount(settlement.total_a).to_string(),
        Money::from_amount(settlement.total_b).to_string(),
    ]);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!("{}\n\n{}", table, settlement.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Participant};
    use crate::services::{compute_balance, MonthTotals};

    fn people() -> Participants {
        Participants::new(Participant::new("David", "D"), Participant::new("Ana", "A"))
    }

    fn settlement(months: Vec<MonthTotals>) -> Settlement {
        let total_a: f64 = months.iter().map(|m| m.total_a).sum();
        let total_b: f64 = months.iter().map(|m| m.total_b).sum();
        Settlement {
            start: Month::March,
            balance: compute_balance(total_a, total_b, &people()),
            months,
            total_a,
            total_b,
        }
    }

    #[test]
    fn test_format_settlement() {
        let s = settlement(vec![MonthTotals {
            month: Month::March,
            total_a: 45.0,
            total_b: 0.0,
        }]);
        assert_eq!(format_settlement(&s), "March: Ana owes David 45.00");
    }

    #[test]
    fn test_details_table() {
        let s = settlement(vec![
            MonthTotals {
                month: Month::March,
                total_a: 35.0,
                total_b: 10.5,
            },
            MonthTotals {
                month: Month::April,
                total_a: 10.0,
                total_b: 0.0,
            },
        ]);

        let output = format_settlement_details(&s, &people());

        assert!(output.contains("David"));
        assert!(output.contains("Ana"));
        assert!(output.contains("March"));
        assert!(output.contains("April"));
        assert!(output.contains("45.00"));
        assert!(output.contains("10.50"));
        assert!(output.ends_with("March to April: Ana owes David 34.50"));
    }

    #[test]
    fn test_details_without_months() {
        let s = settlement(Vec::new());
        let output = format_settlement_details(&s, &people());
        assert!(output.starts_with("No expenses recorded from March onward."));
    }
}
