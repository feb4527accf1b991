use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_money;

fn default_pending() -> bool {
    true
}

/// An unconfirmed transfer between two specific members
///
/// Only the forward side is stored: `change` applies to `id` and the inverse
/// (`-change`) to `target_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetedBalanceChange {
    pub id: String,
    pub target_id: String,
    pub change: Decimal,
    #[serde(default = "default_pending")]
    pub pending: bool,
}

impl TargetedBalanceChange {
    pub fn pending(id: impl Into<String>, target_id: impl Into<String>, change: Decimal) -> Self {
        Self {
            id: id.into(),
            target_id: target_id.into(),
            change,
            pending: true,
        }
    }
}

/// One entry of a settlement plan, persisted by the caller as a pending
/// ledger row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub id: String,
    pub change: Decimal,
    pub pending: bool,
}

impl BalanceChange {
    /// Pending entry with `change` rounded to money
    pub fn pending(id: impl Into<String>, change: Decimal) -> Self {
        Self {
            id: id.into(),
            change: round_money(change),
            pending: true,
        }
    }
}
