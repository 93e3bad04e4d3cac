//! Chat command front end
//!
//! A thin dispatch layer: parse a chat message, run the matching command,
//! and turn the outcome into a single reply. Errors never escape; they are
//! rendered as reply text.

pub mod commands;

pub use commands::ChatCommand;

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::config::Settings;
use crate::error::SplitError;
use crate::models::Month;
use crate::remote::RemoteStore;
use crate::services::SettlementService;

/// An incoming chat message
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Display name of whoever sent the message
    pub author: String,
    pub text: String,
}

impl ChatRequest {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Dispatches chat commands against the configured spreadsheet
pub struct Bot<'a> {
    settings: &'a Settings,
    store: &'a dyn RemoteStore,
    today: NaiveDate,
}

impl<'a> Bot<'a> {
    pub fn new(settings: &'a Settings, store: &'a dyn RemoteStore) -> Self {
        Self {
            settings,
            store,
            today: Local::now().date_naive(),
        }
    }

    /// Use a fixed date for "the current month"
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Handle one message; `None` if it is not a command
    pub fn dispatch(&self, request: &ChatRequest) -> Option<String> {
        let command = ChatCommand::parse(&request.text)?;
        info!("{} issued {:?}", request.author, command);

        let reply = match command {
            ChatCommand::Balance { month } => self.balance(month.as_deref()),
            ChatCommand::Months => format!(
                "Valid months: {}",
                Month::valid_tokens().join(", ")
            ),
            ChatCommand::Hello => format!("Hello, {}!", request.author),
            ChatCommand::Help => help_text(),
            ChatCommand::Unknown(name) => {
                format!("Unknown command '{}'. Try /help", name)
            }
        };
        Some(reply)
    }

    fn balance(&self, month: Option<&str>) -> String {
        let service = SettlementService::new(self.settings, self.store);
        let result = match month {
            Some(token) => service.settle(token),
            None => service.settle_from(Month::of_date(self.today)),
        };

        match result {
            Ok(settlement) => settlement.summary(),
            Err(err) => render_error(&err),
        }
    }
}

/// Turn an error into the reply shown to the requester
pub fn render_error(err: &SplitError) -> String {
    if !err.is_validation() {
        warn!("Command failed: {}", err);
    }
    format!("Error: {}", err)
}

fn help_text() -> String {
    [
        "Commands:",
        "  /balance [month]  who owes whom from that month on (default: this month)",
        "  /months           list accepted month names",
        "  /hello            say hello",
        "  /help             show this message",
    ]
    .join("\n")
}
