#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use settle_up::models::{BalanceChange, Member};
use settle_up::money::sum_changes;

/// Helper to create a member with app access
pub fn member(id: &str, balance: Decimal) -> Member {
    Member::new(id, balance, true)
}

/// Helper to create a member without app access
pub fn offline_member(id: &str, balance: Decimal) -> Member {
    Member::new(id, balance, false)
}

/// Helper to create a deleted member
pub fn deleted_member(id: &str, balance: Decimal, has_access: bool) -> Member {
    let mut m = Member::new(id, balance, has_access);
    m.deleted = true;
    m
}

/// Reference group: balances sum to zero, member 7 has no app access
pub fn reference_members() -> Vec<Member> {
    vec![
        member("1", dec!(-15)),
        member("2", dec!(20)),
        member("3", dec!(10)),
        member("4", dec!(10)),
        member("5", dec!(-30)),
        member("6", dec!(-95)),
        offline_member("7", dec!(100)),
    ]
}

/// Flatten a plan into (id, formatted change) pairs for easy comparison
pub fn summarize(entries: &[BalanceChange]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.id.clone(), e.change.to_string()))
        .collect()
}

/// Build the expected summary from string literals
pub fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(id, change)| (id.to_string(), change.to_string()))
        .collect()
}

/// Assert the plan nets to exactly zero and every entry is pending
pub fn assert_balanced(entries: &[BalanceChange]) {
    let total = sum_changes(entries);
    assert_eq!(total, Decimal::ZERO, "plan does not net to zero: {:?}", entries);
    assert!(entries.iter().all(|e| e.pending), "non-pending entry in {:?}", entries);
}
