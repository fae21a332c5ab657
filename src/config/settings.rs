//! User settings for the expense tracker
//!
//! Stored as `config.json` in the base directory. Every field has a default so
//! older or hand-edited files keep loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Alternative location of the expense file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses_file: Option<PathBuf>,

    /// Whether the expense file is written pretty-printed
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty_json() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            expenses_file: None,
            pretty_json: default_pretty_json(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve which expense file to use.
    ///
    /// An explicit override (command line or environment) wins over the
    /// settings file, which wins over the default location.
    pub fn resolve_expenses_file(
        &self,
        paths: &ExpensePaths,
        override_path: Option<PathBuf>,
    ) -> PathBuf {
        override_path
            .or_else(|| self.expenses_file.clone())
            .unwrap_or_else(|| paths.expenses_file())
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
        assert_eq!(settings.log_level, "info");
        assert!(settings.expenses_file.is_none());
        assert!(settings.pretty_json);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            log_level: "debug".into(),
            pretty_json: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert!(!loaded.pretty_json);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.log_level, "info");
        assert!(settings.pretty_json);
    }

    #[test]
    fn test_corrupt_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_resolve_expenses_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(
            settings.resolve_expenses_file(&paths, None),
            paths.expenses_file()
        );

        settings.expenses_file = Some(PathBuf::from("/tmp/from-settings.json"));
        assert_eq!(
            settings.resolve_expenses_file(&paths, None),
            PathBuf::from("/tmp/from-settings.json")
        );

        assert_eq!(
            settings.resolve_expenses_file(&paths, Some(PathBuf::from("cli.json"))),
            PathBuf::from("cli.json")
        );
    }
}
