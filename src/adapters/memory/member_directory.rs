//! In-memory member directory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::ledger::MemberSummary;
use crate::ports::MemberDirectory;

#[derive(Debug, Default)]
pub struct InMemoryMemberDirectory {
    members: RwLock<HashMap<MemberId, MemberSummary>>,
}

impl InMemoryMemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory pre-filled with the given members.
    pub fn with_members(members: impl IntoIterator<Item = MemberSummary>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().map(|m| (m.id, m)).collect()),
        }
    }

    pub async fn insert(&self, member: MemberSummary) {
        self.members.write().await.insert(member.id, member);
    }

    /// Removes a member record. Returns the removed summary, if any.
    pub async fn remove(&self, id: &MemberId) -> Option<MemberSummary> {
        self.members.write().await.remove(id)
    }
}

#[async_trait]
impl MemberDirectory for InMemoryMemberDirectory {
    async fn get_member(&self, id: &MemberId) -> Result<Option<MemberSummary>, DomainError> {
        Ok(self.members.read().await.get(id).cloned())
    }
}
