//! Core data models for wallet-tui

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
