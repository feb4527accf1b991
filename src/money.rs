//! Two-decimal monetary helpers.
//!
//! Every amount that leaves the planner goes through [`round_money`], so a plan
//! built from inputs that are exact multiples of 0.01 never drifts.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::BalanceChange;

/// Number of fractional digits carried by every monetary amount
pub const MONEY_SCALE: u32 = 2;

/// Round to two fractional digits (midpoint away from zero) and fix the scale,
/// so `10` renders as `"10.00"`. Zero is always the positive `"0.00"`.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Decimal::new(0, MONEY_SCALE);
    }
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Sign of an amount relative to zero
pub fn money_sign(amount: Decimal) -> Ordering {
    amount.cmp(&Decimal::ZERO)
}

/// Exact net total of a list of balance changes
pub fn sum_changes(changes: &[BalanceChange]) -> Decimal {
    changes.iter().map(|c| c.change).sum()
}
