pub mod balance_change;
pub mod member;
pub mod request;

pub use balance_change::{BalanceChange, TargetedBalanceChange};
pub use member::Member;
pub use request::SettlementRequest;
