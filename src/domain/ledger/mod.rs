//! Subscription ledger domain.
//!
//! Owns subscription periods for members: enrollment, rescheduling,
//! cancellation, and the derived `is_active` state.

mod errors;
mod events;
mod member;
mod plan;
mod subscription;

pub use errors::LedgerError;
pub use events::{PlanSnapshot, SubscriptionEvent};
pub use member::MemberSummary;
pub use plan::{Plan, MAX_DURATION_MONTHS};
pub use subscription::{
    ensure_start_not_in_past, find_blocking, is_active_between, Subscription, SubscriptionTerms,
};
