//! Strongly-typed ID wrapper for transactions
//!
//! The newtype prevents a raw display string from being used where a list
//! identity is expected. Seed ids are short fixed strings, so the payload is
//! a String rather than a generated UUID.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a transaction, used for list rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create an ID from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TransactionId::new("1");
        assert_eq!(format!("{}", id), "txn-1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_id_equality() {
        let id1 = TransactionId::new("7");
        let id2 = TransactionId::from("7");
        assert_eq!(id1, id2);

        let id3 = TransactionId::new("8");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
