//! splitsheet - settle shared expenses from a monthly spreadsheet
//!
//! Two people record their expenses on separate sheets of one shared
//! workbook, one column per month. This crate reads both sheets from a given
//! month up to the last recorded month, sums the expense rows, and reports
//! who owes whom.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths and overrides
//! - `error`: Custom error types
//! - `models`: Core data models (cells, months, layout, participants, money)
//! - `sheet`: Cell access and workbook decoding
//! - `services`: Column scan, range summation, balance and settlement
//! - `remote`: Fetching and persisting the shared spreadsheet
//! - `bot`: Chat command dispatch
//! - `cli`: CLI command handlers
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use splitsheet::config::{Settings, SplitPaths};
//! use splitsheet::remote::open_store;
//! use splitsheet::services::SettlementService;
//!
//! let paths = SplitPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_store(&settings, &paths)?;
//! let settlement = SettlementService::new(&settings, store.as_ref()).settle("mar")?;
//! println!("{}", settlement.summary());
//! ```

pub mod bot;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod remote;
pub mod services;
pub mod sheet;

pub use error::{SplitError, SplitResult};
