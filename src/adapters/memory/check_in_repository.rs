//! In-memory check-in repository for tests and local runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::attendance::CheckIn;
use crate::domain::foundation::{DomainError, MemberId, Page, PageRequest, Timestamp};
use crate::ports::CheckInRepository;

/// Append-only check-in log.
#[derive(Debug, Default)]
pub struct InMemoryCheckInRepository {
    check_ins: RwLock<Vec<CheckIn>>,
}

impl InMemoryCheckInRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// All check-ins of a member in insertion order.
    pub async fn all_for_member(&self, member_id: &MemberId) -> Vec<CheckIn> {
        self.check_ins
            .read()
            .await
            .iter()
            .filter(|c| &c.member_id == member_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn save(&self, check_in: &CheckIn) -> Result<(), DomainError> {
        self.check_ins.write().await.push(check_in.clone());
        Ok(())
    }

    async fn count_between(
        &self,
        member_id: &MemberId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<u64, DomainError> {
        let count = self
            .check_ins
            .read()
            .await
            .iter()
            .filter(|c| &c.member_id == member_id && c.created_at >= from && c.created_at <= to)
            .count();
        Ok(count as u64)
    }

    async fn list_for_member(
        &self,
        member_id: &MemberId,
        page: PageRequest,
    ) -> Result<Page<CheckIn>, DomainError> {
        let mut matching = self.all_for_member(member_id).await;
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }
}
