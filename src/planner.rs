//! Greedy settle-up planner.
//!
//! Given a payer's effective balance, picks counterparties with the opposite
//! sign (non-deleted first, then members with app access, then largest
//! magnitude first) and emits the entries that bring the payer to zero.
//! Largest-first is a heuristic for the fewest entries; it is not optimal for
//! every distribution but the resulting order is relied upon by callers.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::accumulator::absorb_pending;
use crate::models::{BalanceChange, Member, TargetedBalanceChange};
use crate::money::{money_sign, round_money, sum_changes};

/// Compute the ordered settlement plan for `payer_id`
///
/// The first entry is always the payer with the negated effective balance.
/// The remaining entries sum to the opposite, so the plan nets to zero.
///
/// # Panics
///
/// Panics if the snapshot is inconsistent: the opposite-signed members cannot
/// cover the payer's balance. A ledger whose balances sum to zero never
/// triggers this.
pub fn plan_settlement(
    payer_id: &str,
    payer_balance: Decimal,
    members: &[Member],
    pending: &[TargetedBalanceChange],
) -> Vec<BalanceChange> {
    let absorbed = absorb_pending(payer_id, payer_balance, members, pending);
    let balance = absorbed.effective_balance;

    if balance.is_zero() {
        debug!(payer = %payer_id, "Payer already settled");
        return vec![BalanceChange::pending(payer_id, Decimal::ZERO)];
    }

    let candidates = rank_candidates(payer_id, balance, &absorbed.members);

    let mut entries = vec![BalanceChange::pending(payer_id, -balance)];
    let mut working = balance;

    for member in candidates {
        let m = member.balance;
        let covered = match money_sign(balance) {
            Ordering::Less => working + m >= Decimal::ZERO,
            _ => working + m <= Decimal::ZERO,
        };

        if covered {
            entries.push(BalanceChange::pending(&member.id, working));
            working = Decimal::ZERO;
            break;
        }

        entries.push(BalanceChange::pending(&member.id, -m));
        working = round_money(working + m);
    }

    assert!(
        working.is_zero(),
        "members cannot cover payer {} balance {}: {} left unsettled",
        payer_id,
        balance,
        working
    );

    for entry in &entries {
        debug!(member = %entry.id, change = %entry.change, "Planned entry");
    }
    info!(
        payer = %payer_id,
        balance = %balance,
        entries = entries.len(),
        net = %sum_changes(&entries),
        "Settlement planned"
    );

    entries
}

/// Members able to offset `balance`, best counterparty first
fn rank_candidates<'a>(payer_id: &str, balance: Decimal, members: &'a [Member]) -> Vec<&'a Member> {
    let candidates: Vec<&Member> = members
        .iter()
        .filter(|m| m.id != payer_id && m.can_offset(balance))
        .collect();

    order_candidates(balance, candidates)
}

/// Sort offsetting members into settlement order
///
/// # Panics
///
/// Panics if any member has the same sign as `balance` or a zero balance;
/// such a member would push the payer further from zero.
fn order_candidates(balance: Decimal, mut candidates: Vec<&Member>) -> Vec<&Member> {
    for member in &candidates {
        assert!(
            member.can_offset(balance),
            "member {} with balance {} cannot offset payer balance {}",
            member.id,
            member.balance,
            balance
        );
    }

    // Stable: equal ranks keep snapshot order
    candidates.sort_by(|a, b| {
        a.deleted
            .cmp(&b.deleted)
            .then_with(|| b.has_access.cmp(&a.has_access))
            .then_with(|| b.balance.abs().cmp(&a.balance.abs()))
    });

    candidates
}
