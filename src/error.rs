//! Custom error types for wallet-tui
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The taxonomy is deliberately small: the
//! ledger is fixed seed data, so almost nothing here can fail at runtime.

use thiserror::Error;

/// The main error type for wallet-tui operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl WalletError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet-tui operations
pub type WalletResult<T> = Result<T, WalletError>;
