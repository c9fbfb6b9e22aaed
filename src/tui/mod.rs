//! Terminal User Interface module
//!
//! This module provides the wallet dashboard TUI using ratatui: the four
//! screens, the drawer+tabs navigation shell, and the action overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
