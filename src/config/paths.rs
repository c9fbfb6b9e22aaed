//! Path management for wallet-tui
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `WALLET_TUI_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wallet-tui` or `~/.config/wallet-tui`
//! 3. Windows: `%APPDATA%\wallet-tui`

use std::path::PathBuf;

use crate::error::WalletError;

/// Manages all paths used by wallet-tui
#[derive(Debug, Clone)]
pub struct WalletPaths {
    /// Base directory for all wallet-tui configuration
    base_dir: PathBuf,
}

impl WalletPaths {
    /// Create a new WalletPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WalletError> {
        let base_dir = if let Ok(custom) = std::env::var("WALLET_TUI_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WalletPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/wallet-tui/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WalletError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WalletError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("wallet-tui"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WalletError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WalletError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wallet-tui"))
}
