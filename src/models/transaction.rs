//! Transaction model
//!
//! Represents the immutable ledger entries the screens render. Entries are
//! seed data: nothing in the application creates, updates, or deletes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (positive amount)
    Income,
    /// Money going out (negative amount)
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, stable for list rendering
    pub id: TransactionId,

    /// Display label (payee or description)
    pub title: String,

    /// Signed amount: positive for income, negative for expense
    pub amount: Money,

    /// Direction; invariant: `kind == Income` exactly when `amount > 0`
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a transaction from a signed amount, deriving the kind
    pub fn new(
        id: impl Into<TransactionId>,
        title: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        let kind = if amount.is_positive() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            kind,
            date,
        }
    }

    /// Create a transaction from a textually-encoded amount ("-$5.40")
    ///
    /// A malformed amount contributes zero rather than failing: this is
    /// display data and the render path must never crash on it.
    pub fn from_display_amount(
        id: impl Into<TransactionId>,
        title: impl Into<String>,
        amount: &str,
        date: NaiveDate,
    ) -> Self {
        Self::new(id, title, Money::parse(amount).unwrap_or_default(), date)
    }

    /// Check the kind-matches-sign invariant
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        let sign_says_income = self.amount.is_positive();
        let kind_says_income = self.kind == TransactionKind::Income;
        if sign_says_income != kind_says_income {
            return Err(TransactionValidationError::KindSignMismatch {
                kind: self.kind,
                amount: self.amount,
            });
        }
        Ok(())
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    KindSignMismatch { kind: TransactionKind, amount: Money },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindSignMismatch { kind, amount } => {
                write!(f, "Kind {} does not match amount sign ({})", kind, amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
