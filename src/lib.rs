//! wallet-tui - Terminal wallet dashboard
//!
//! This library provides the core functionality for the wallet-tui
//! application: a drawer+tabs navigation shell over four themed screens
//! (home, transactions, settings, about), rendered against a fixed,
//! in-memory transaction ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `ledger`: Seed dataset and summary computation
//! - `theme`: The global light/dark flag and the two palettes
//! - `tui`: Application state, event loop, and screen rendering

pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod theme;
pub mod tui;

pub use error::WalletError;
