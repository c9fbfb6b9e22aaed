//! User settings for wallet-tui
//!
//! Manages user preferences: the startup theme mode, the currency symbol,
//! and the greeting name shown on the home screen. The live light/dark flag
//! is session state and is never written back here.

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;
use crate::theme::ThemeMode;

/// User settings for wallet-tui
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Startup theme preference
    #[serde(default)]
    pub theme: ThemeMode,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name used in the home screen greeting and the drawer header
    #[serde(default = "default_greeting_name")]
    pub greeting_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_greeting_name() -> String {
    "Nelson".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: ThemeMode::default(),
            currency_symbol: default_currency(),
            greeting_name: default_greeting_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| WalletError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeMode::Auto);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.greeting_name, "Nelson");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.theme = ThemeMode::Dark;
        settings.greeting_name = "Ada".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, ThemeMode::Dark);
        assert_eq!(loaded.greeting_name, "Ada");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, ThemeMode::Auto);
    }

    #[test]
    fn test_unknown_theme_string_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"theme":"sepia"}"#).unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.theme, deserialized.theme);
        assert_eq!(settings.currency_symbol, deserialized.currency_symbol);
    }
}
