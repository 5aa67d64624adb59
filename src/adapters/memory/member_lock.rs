//! In-process per-member lock.
//!
//! Serializes work for one member inside a single service instance. Use the
//! PostgreSQL advisory lock when several instances share a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, MemberId};
use crate::ports::{MemberLock, MemberLockGuard};

/// One async mutex per member, created on first use.
#[derive(Debug, Default)]
pub struct InProcessMemberLock {
    locks: Mutex<HashMap<MemberId, Arc<Mutex<()>>>>,
}

impl InProcessMemberLock {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, member_id: &MemberId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        // Drop slots nobody holds or waits on.
        locks.retain(|id, slot| id == member_id || Arc::strong_count(slot) > 1);
        locks.entry(*member_id).or_default().clone()
    }
}

#[async_trait]
impl MemberLock for InProcessMemberLock {
    async fn acquire(&self, member_id: &MemberId) -> Result<MemberLockGuard, DomainError> {
        let slot = self.slot(member_id).await;
        let guard = slot.lock_owned().await;
        Ok(MemberLockGuard::new(guard))
    }
}
