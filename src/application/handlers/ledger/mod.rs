//! Subscription ledger handlers.

mod cancel_subscription;
mod check_active_subscription;
mod edit_subscription;
mod enroll_subscription;
mod get_subscription;
mod list_subscriptions;
mod view;

pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
};
pub use check_active_subscription::CheckActiveSubscriptionHandler;
pub use edit_subscription::{EditSubscriptionCommand, EditSubscriptionHandler, EditSubscriptionResult};
pub use enroll_subscription::{
    EnrollSubscriptionCommand, EnrollSubscriptionHandler, EnrollSubscriptionResult,
};
pub use get_subscription::{GetSubscriptionHandler, GetSubscriptionQuery};
pub use list_subscriptions::{
    ListSubscriptionsHandler, ListSubscriptionsQuery, DEFAULT_SUBSCRIPTIONS_PER_PAGE,
};
pub use view::{SubscriptionEnricher, SubscriptionView};
