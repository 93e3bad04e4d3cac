//! Configuration module for splitsheet
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Command-line and environment overrides

pub mod paths;
pub mod settings;

pub use paths::SplitPaths;
pub use settings::{RemoteSettings, Settings, SettingsOverrides, StoreKind};
