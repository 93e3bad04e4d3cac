//! Path management for splitsheet
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITSHEET_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/splitsheet` on Linux,
//!    `~/Library/Application Support/splitsheet` on macOS,
//!    `%APPDATA%\splitsheet\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SplitError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPLITSHEET_DATA_DIR";

/// Manages all paths used by splitsheet
#[derive(Debug, Clone)]
pub struct SplitPaths {
    /// Base directory for all splitsheet files
    base_dir: PathBuf,
}

impl SplitPaths {
    /// Create a new SplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SplitError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding downloaded copies of the shared spreadsheet
    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir.join("downloads")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.downloads_dir())
            .map_err(|e| SplitError::Io(format!("Failed to create downloads directory: {}", e)))?;

        Ok(())
    }

    /// Check if splitsheet has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SplitError> {
    ProjectDirs::from("", "", "splitsheet")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SplitError::Config("Could not determine a home directory".into()))
}
