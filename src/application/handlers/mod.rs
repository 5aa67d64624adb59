//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod attendance;
pub mod ledger;

#[cfg(test)]
pub(crate) mod test_support;

pub use attendance::{
    ListCheckInsHandler, ListCheckInsQuery, ListCheckInsResult, RecordCheckInCommand,
    RecordCheckInHandler, RecordCheckInResult,
};
pub use ledger::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
    CheckActiveSubscriptionHandler, EditSubscriptionCommand, EditSubscriptionHandler,
    EditSubscriptionResult, EnrollSubscriptionCommand, EnrollSubscriptionHandler,
    EnrollSubscriptionResult, GetSubscriptionHandler, GetSubscriptionQuery,
    ListSubscriptionsHandler, ListSubscriptionsQuery, SubscriptionEnricher, SubscriptionView,
};
