use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BalanceChange, Member, TargetedBalanceChange};
use crate::planner::plan_settlement;

/// Point-in-time snapshot handed to the planner by the caller
///
/// The members and pending changes must come from the same consistency scope
/// that will later persist the resulting plan. A plan is not replayable
/// against a different snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRequest {
    pub payer_id: String,
    pub balance: Decimal,
    pub members: Vec<Member>,
    #[serde(default)]
    pub pending_changes: Vec<TargetedBalanceChange>,
}

impl SettlementRequest {
    /// Compute the settlement plan for this snapshot
    pub fn plan(&self) -> Vec<BalanceChange> {
        plan_settlement(
            &self.payer_id,
            self.balance,
            &self.members,
            &self.pending_changes,
        )
    }
}
