use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{money_sign, round_money};

/// One participant's standing in a group
///
/// A positive balance means the group owes the member, a negative one means
/// the member owes the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub balance: Decimal,
    /// Member uses the app and is preferred as a settlement counterparty.
    /// Required in input; only `deleted` defaults to `false`.
    pub has_access: bool,
    /// Kept for history only; least-preferred counterparty
    #[serde(default)]
    pub deleted: bool,
}

impl Member {
    /// Create a non-deleted member
    pub fn new(id: impl Into<String>, balance: Decimal, has_access: bool) -> Self {
        Self {
            id: id.into(),
            balance: round_money(balance),
            has_access,
            deleted: false,
        }
    }

    /// Add a signed change to the balance, keeping two-decimal precision
    pub fn apply_change(&mut self, change: Decimal) {
        self.balance = round_money(self.balance + change);
    }

    /// Whether this member's balance can offset `balance`: strictly the
    /// opposite sign, so a zero balance never offsets anything
    pub fn can_offset(&self, balance: Decimal) -> bool {
        let own = money_sign(self.balance);
        own != Ordering::Equal && own == money_sign(balance).reverse()
    }
}
