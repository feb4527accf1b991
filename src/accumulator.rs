use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{Member, TargetedBalanceChange};
use crate::money::round_money;

/// Member balances after folding in pending changes
#[derive(Debug, Clone, PartialEq)]
pub struct AbsorbedBalances {
    /// Working copy of the members with pending changes applied
    pub members: Vec<Member>,
    /// The payer's balance once pending changes touching them are applied
    pub effective_balance: Decimal,
}

/// Apply pending targeted changes to a copy of `members`
///
/// Each change adds `change` to its source member and subtracts it from its
/// target. Changes that reference a member outside `members` are skipped.
/// `balance` is returned as the effective balance unless a change touches the
/// payer, in which case the payer's last updated balance wins.
pub fn absorb_pending(
    payer_id: &str,
    balance: Decimal,
    members: &[Member],
    pending: &[TargetedBalanceChange],
) -> AbsorbedBalances {
    // Snapshot rows may carry more than two decimals when deserialized
    let mut members: Vec<Member> = members
        .iter()
        .map(|m| Member {
            balance: round_money(m.balance),
            ..m.clone()
        })
        .collect();
    let mut effective_balance = round_money(balance);

    // First occurrence wins if the snapshot ever repeats an id
    let mut index: HashMap<String, usize> = HashMap::with_capacity(members.len());
    for (i, member) in members.iter().enumerate() {
        index.entry(member.id.clone()).or_insert(i);
    }

    for change in pending {
        if !change.pending {
            // Confirmed changes are already part of Member.balance
            warn!(
                source = %change.id,
                target = %change.target_id,
                "Ignoring confirmed change passed as pending"
            );
            continue;
        }

        let (source, target) = match (index.get(&change.id), index.get(&change.target_id)) {
            (Some(&s), Some(&t)) => (s, t),
            _ => {
                debug!(
                    source = %change.id,
                    target = %change.target_id,
                    "Skipping pending change outside the member snapshot"
                );
                continue;
            }
        };

        members[source].apply_change(change.change);
        members[target].apply_change(-change.change);

        if members[source].id == payer_id {
            effective_balance = members[source].balance;
        }
        if members[target].id == payer_id {
            effective_balance = members[target].balance;
        }

        debug!(
            source = %change.id,
            target = %change.target_id,
            change = %change.change,
            "Applied pending change"
        );
    }

    AbsorbedBalances {
        members,
        effective_balance,
    }
}
