//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod chat;
pub mod upload;

pub use balance::{handle_balance_command, handle_months_command};
pub use chat::{handle_chat_command, run_chat};
pub use upload::handle_upload_command;
