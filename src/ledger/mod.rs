//! Ledger module
//!
//! The fixed seed dataset and the pure summary computation over it.

pub mod seed;
pub mod summary;

pub use summary::{summarize, LedgerSummary};
