//! Subscription repository port.
//!
//! Persists Subscription aggregates and answers the temporal queries the
//! ledger needs: blocking-overlap lookups, the active-now check, and the
//! paginated ongoing/future listing.
//!
//! Callers serialize writes for one member through `MemberLock`; adapters
//! backed by a database may additionally enforce non-overlap with a
//! constraint, reported as `OverlappingSubscription` with a `member_id`
//! detail.

use crate::domain::foundation::{
    DomainError, MemberId, Page, PageRequest, SubscriptionId, Timestamp,
};
use crate::domain::ledger::Subscription;
use async_trait::async_trait;

/// Repository port for Subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Save a new subscription.
    ///
    /// # Errors
    ///
    /// - `OverlappingSubscription` if the store rejects the interval
    /// - `DatabaseError` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Update an existing subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    /// - `OverlappingSubscription` if the store rejects the interval
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError>;

    /// Hard-delete a subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError>;

    /// Subscriptions of a member whose `end_date` is at or after `threshold`.
    async fn find_for_member_ending_on_or_after(
        &self,
        member_id: &MemberId,
        threshold: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError>;

    /// Returns true if some subscription of the member satisfies
    /// `start_date <= at <= end_date`.
    async fn exists_covering(&self, member_id: &MemberId, at: Timestamp)
        -> Result<bool, DomainError>;

    /// Subscriptions with `end_date >= now`, newest `end_date` first.
    async fn list_ongoing_or_future(
        &self,
        now: Timestamp,
        page: PageRequest,
    ) -> Result<Page<Subscription>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn subscription_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SubscriptionRepository) {}
    }
}
