//! User settings for splitsheet
//!
//! Holds the participants, where the shared spreadsheet lives, and the sheet
//! layout. Loaded from `config.json`, then overridden from the command line
//! or environment, and passed explicitly into the services.

use serde::{Deserialize, Serialize};

use super::paths::SplitPaths;
use crate::error::SplitError;
use crate::models::{Participants, SheetLayout};
use crate::services::NonNumericPolicy;

/// Where the shared spreadsheet is fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// A file on the local filesystem; `file_id` is its path
    #[default]
    Local,
    /// A Google Drive file; `file_id` is the Drive file ID
    Drive,
}

impl std::str::FromStr for StoreKind {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "drive" | "gdrive" => Ok(Self::Drive),
            other => Err(SplitError::Config(format!(
                "Unknown store '{}'. Use 'local' or 'drive'",
                other
            ))),
        }
    }
}

/// Remote spreadsheet settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RemoteSettings {
    /// Which store implementation to use
    #[serde(default)]
    pub kind: StoreKind,

    /// Identifier of the shared spreadsheet within the store
    #[serde(default)]
    pub file_id: String,

    /// Bearer token used when uploading to Drive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// User settings for splitsheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The two people sharing expenses
    #[serde(default)]
    pub participants: Participants,

    /// Where the shared spreadsheet lives
    #[serde(default)]
    pub remote: RemoteSettings,

    /// Row and column positions in each sheet
    #[serde(default)]
    pub layout: SheetLayout,

    /// Handling of text found in expense cells
    #[serde(default)]
    pub non_numeric_policy: NonNumericPolicy,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            participants: Participants::default(),
            remote: RemoteSettings::default(),
            layout: SheetLayout::default(),
            non_numeric_policy: NonNumericPolicy::default(),
        }
    }
}

/// Values supplied on the command line or through the environment
///
/// Every `Some` field replaces the corresponding setting.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub file_id: Option<String>,
    pub store: Option<StoreKind>,
    pub access_token: Option<String>,
    pub name_a: Option<String>,
    pub sheet_a: Option<String>,
    pub name_b: Option<String>,
    pub sheet_b: Option<String>,
    pub non_numeric_policy: Option<NonNumericPolicy>,
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply command-line and environment overrides
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(file_id) = &overrides.file_id {
            self.remote.file_id = file_id.clone();
        }
        if let Some(store) = overrides.store {
            self.remote.kind = store;
        }
        if let Some(token) = &overrides.access_token {
            self.remote.access_token = Some(token.clone());
        }
        if let Some(name) = &overrides.name_a {
            self.participants.a.name = name.clone();
        }
        if let Some(sheet) = &overrides.sheet_a {
            self.participants.a.sheet = sheet.clone();
        }
        if let Some(name) = &overrides.name_b {
            self.participants.b.name = name.clone();
        }
        if let Some(sheet) = &overrides.sheet_b {
            self.participants.b.sheet = sheet.clone();
        }
        if let Some(policy) = overrides.non_numeric_policy {
            self.non_numeric_policy = policy;
        }
    }

    /// Check the settings are complete enough to settle a balance
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.remote.file_id.trim().is_empty() {
            return Err(SplitError::Config(
                "No spreadsheet configured. Set remote.file_id or SPLITSHEET_FILE_ID".into(),
            ));
        }

        if self.participants.a.sheet == self.participants.b.sheet {
            return Err(SplitError::Config(format!(
                "Both participants use the same sheet '{}'",
                self.participants.a.sheet
            )));
        }

        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.remote.kind, StoreKind::Local);
        assert_eq!(settings.non_numeric_policy, NonNumericPolicy::Skip);
        assert_eq!(settings.layout, SheetLayout::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.remote.kind = StoreKind::Drive;
        settings.remote.file_id = "abc123".into();
        settings.participants.a.name = "David".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.remote.kind, StoreKind::Drive);
        assert_eq!(loaded.remote.file_id, "abc123");
        assert_eq!(loaded.participants.a.name, "David");
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.remote.file_id.is_empty());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();
        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(SplitError::Config(_))
        ));
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings::default();
        let overrides = SettingsOverrides {
            file_id: Some("sheet.xlsx".into()),
            sheet_a: Some("Despesas David 25".into()),
            name_b: Some("Ana".into()),
            non_numeric_policy: Some(NonNumericPolicy::Reject),
            ..SettingsOverrides::default()
        };

        settings.apply_overrides(&overrides);

        assert_eq!(settings.remote.file_id, "sheet.xlsx");
        assert_eq!(settings.participants.a.sheet, "Despesas David 25");
        assert_eq!(settings.participants.a.name, "A");
        assert_eq!(settings.participants.b.name, "Ana");
        assert_eq!(settings.non_numeric_policy, NonNumericPolicy::Reject);
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings::default();
        assert!(matches!(settings.validate(), Err(SplitError::Config(_))));

        settings.remote.file_id = "sheet.xlsx".into();
        assert!(settings.validate().is_ok());

        settings.participants.b.sheet = settings.participants.a.sheet.clone();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_store_kind_from_str() {
        assert_eq!("local".parse::<StoreKind>().unwrap(), StoreKind::Local);
        assert_eq!(" Drive ".parse::<StoreKind>().unwrap(), StoreKind::Drive);
        assert!("s3".parse::<StoreKind>().is_err());
    }
}
