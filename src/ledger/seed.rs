//! Seed ledger data
//!
//! The application has no backend: the ledger, the displayed balance, and
//! the account-holder profile are fixed at build time. The raw entries keep
//! the textually-encoded amounts of the upstream data feed and are parsed
//! once on first access.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

/// The account holder shown in the drawer header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
}

/// Account holder for the seed dataset
pub const PROFILE: Profile = Profile {
    name: "Nelson Chege",
    email: "nelson@email.com",
};

/// Hard-coded display balance for the home screen card
pub const BALANCE: Money = Money::from_cents(543_055);

/// Raw seed rows: (id, title, display amount, date)
const RAW_TRANSACTIONS: &[(&str, &str, &str, &str)] = &[
    ("1", "Starbucks", "-$5.40", "2025-05-20"),
    ("2", "Salary", "+$1200.00", "2025-05-18"),
    ("3", "Netflix", "-$12.99", "2025-05-17"),
    ("4", "Cashback", "+$3.50", "2025-05-16"),
    ("5", "Amazon", "-$48.23", "2025-05-15"),
];

static TRANSACTIONS: LazyLock<Vec<Transaction>> = LazyLock::new(|| {
    RAW_TRANSACTIONS
        .iter()
        .map(|&(id, title, amount, date)| {
            // A bad date in seed data is a build-time mistake, not a runtime
            // condition; fall back to the epoch rather than crash a render.
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default();
            Transaction::from_display_amount(id, title, amount, date)
        })
        .collect()
});

/// The read-only seed ledger
pub fn transactions() -> &'static [Transaction] {
    &TRANSACTIONS
}
