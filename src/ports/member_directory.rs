//! Member directory port.
//!
//! Used to validate member existence before enrollment and to detect a
//! subscription whose owner has been removed.

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::ledger::MemberSummary;
use async_trait::async_trait;

/// Read-only access to member records.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Look up a member by ID.
    ///
    /// Returns `None` if the member does not exist.
    async fn get_member(&self, id: &MemberId) -> Result<Option<MemberSummary>, DomainError>;
}
