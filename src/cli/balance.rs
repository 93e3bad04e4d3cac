//! Balance and month-listing CLI commands

use chrono::Local;

use crate::config::{Settings, SplitPaths};
use crate::display::{format_month_table, format_settlement, format_settlement_details};
use crate::error::SplitResult;
use crate::models::Month;
use crate::remote::open_store;
use crate::services::SettlementService;

/// Settle from `month` (or the current month) and print the result
pub fn handle_balance_command(
    settings: &Settings,
    paths: &SplitPaths,
    month: Option<String>,
    detailed: bool,
) -> SplitResult<()> {
    let store = open_store(settings, paths)?;
    let service = SettlementService::new(settings, store.as_ref());

    let settlement = match month {
        Some(token) => service.settle(&token)?,
        None => service.settle_from(Month::of_date(Local::now().date_naive()))?,
    };

    if detailed {
        println!(
            "{}",
            format_settlement_details(&settlement, &settings.participants)
        );
    } else {
        println!("{}", format_settlement(&settlement));
    }

    Ok(())
}

/// Print the accepted month tokens and their columns
pub fn handle_months_command(settings: &Settings) {
    println!("{}", format_month_table(&settings.layout.month_map()));
}
