//! Ledger summary computation
//!
//! Derives the income/expense totals shown on the home screen. The function
//! is pure and cheap; it runs on every render with no caching.

use crate::models::{Money, Transaction};

/// Aggregate totals derived from a transaction list
///
/// Both totals are non-negative: expenses are accumulated as absolute
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    /// Sum of all income amounts
    pub income_total: Money,
    /// Sum of the absolute values of all expense amounts
    pub expense_total: Money,
}

/// Compute income and expense totals for a transaction list
///
/// Order-independent and side-effect free; an empty list yields zero totals.
pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let mut income_total = Money::zero();
    let mut expense_total = Money::zero();

    for txn in transactions {
        if txn.is_income() {
            income_total += txn.amount;
        } else {
            expense_total += txn.amount.abs();
        }
    }

    LedgerSummary {
        income_total,
        expense_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn txn(id: &str, cents: i64) -> Transaction {
        Transaction::new(
            id,
            "test",
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        )
    }

    #[test]
    fn test_empty_list_yields_zero_totals() {
        let summary = summarize(&[]);
        assert_eq!(summary.income_total, Money::zero());
        assert_eq!(summary.expense_total, Money::zero());
    }

    #[test]
    fn test_totals_are_non_negative() {
        let txns = vec![txn("1", -10_000), txn("2", 2_500), txn("3", -1)];
        let summary = summarize(&txns);
        assert!(!summary.income_total.is_negative());
        assert!(!summary.expense_total.is_negative());
    }

    #[test]
    fn test_seed_scenario_totals() {
        // -$5.40, +$1200.00, -$12.99, +$3.50, -$48.23
        let summary = summarize(seed::transactions());
        assert_eq!(summary.income_total, Money::from_cents(120_350));
        assert_eq!(summary.expense_total, Money::from_cents(6_662));
    }

    #[test]
    fn test_order_independence() {
        let mut txns = seed::transactions().to_vec();
        let forward = summarize(&txns);
        txns.reverse();
        let backward = summarize(&txns);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotent() {
        let txns = seed::transactions();
        assert_eq!(summarize(txns), summarize(txns));
    }
}
