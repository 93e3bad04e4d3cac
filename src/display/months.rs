//! Month table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Month, MonthColumnMap};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    name: String,
    #[tabled(rename = "PT")]
    portuguese: &'static str,
    #[tabled(rename = "EN")]
    english: &'static str,
    #[tabled(rename = "Column")]
    column: u32,
}

/// Table of accepted month tokens and the column each one reads
pub fn format_month_table(map: &MonthColumnMap) -> String {
    let rows: Vec<MonthRow> = Month::ALL
        .iter()
        .map(|&month| MonthRow {
            name: month.to_string(),
            portuguese: month.portuguese(),
            english: month.english(),
            column: map.column_of(month),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
