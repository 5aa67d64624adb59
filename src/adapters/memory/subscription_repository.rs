//! In-memory subscription repository for tests and local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, MemberId, Page, PageRequest, SubscriptionId, Timestamp,
};
use crate::domain::ledger::Subscription;
use crate::ports::SubscriptionRepository;

/// Subscription store backed by a `HashMap`.
///
/// Does not enforce non-overlap on its own; callers hold the member lock.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// All stored subscriptions of a member.
    pub async fn all_for_member(&self, member_id: &MemberId) -> Vec<Subscription> {
        self.subscriptions
            .read()
            .await
            .values()
            .filter(|s| s.member_id.as_ref() == Some(member_id))
            .cloned()
            .collect()
    }

    /// Clears the member reference of their subscriptions, as the store
    /// does when a member record is deleted.
    pub async fn sever_member(&self, member_id: &MemberId) {
        for sub in self.subscriptions.write().await.values_mut() {
            if sub.member_id.as_ref() == Some(member_id) {
                sub.member_id = None;
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.subscriptions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.subscriptions.read().await.is_empty()
    }
}

fn not_found(id: &SubscriptionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubscriptionNotFound,
        format!("Subscription not found: {}", id),
    )
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.subscriptions
            .write()
            .await
            .insert(subscription.id, subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions.get_mut(&subscription.id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(not_found(&subscription.id)),
        }
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        Ok(self.subscriptions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError> {
        self.subscriptions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn find_for_member_ending_on_or_after(
        &self,
        member_id: &MemberId,
        threshold: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .filter(|s| s.member_id.as_ref() == Some(member_id) && s.end_date >= threshold)
            .cloned()
            .collect())
    }

    async fn exists_covering(
        &self,
        member_id: &MemberId,
        at: Timestamp,
    ) -> Result<bool, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .any(|s| s.member_id.as_ref() == Some(member_id) && s.is_active_at(at)))
    }

    async fn list_ongoing_or_future(
        &self,
        now: Timestamp,
        page: PageRequest,
    ) -> Result<Page<Subscription>, DomainError> {
        let mut matching: Vec<Subscription> = self
            .subscriptions
            .read()
            .await
            .values()
            .filter(|s| s.is_ongoing_or_future(now))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.end_date.cmp(&a.end_date));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }
}
