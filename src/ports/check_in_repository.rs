//! Check-in repository port.
//!
//! Check-ins are append-only: there is no update or delete.

use crate::domain::attendance::CheckIn;
use crate::domain::foundation::{DomainError, MemberId, Page, PageRequest, Timestamp};
use async_trait::async_trait;

/// Repository port for CheckIn persistence.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Append a check-in.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, check_in: &CheckIn) -> Result<(), DomainError>;

    /// Counts a member's check-ins with `from <= created_at <= to`.
    async fn count_between(
        &self,
        member_id: &MemberId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<u64, DomainError>;

    /// A member's check-ins, newest first.
    async fn list_for_member(
        &self,
        member_id: &MemberId,
        page: PageRequest,
    ) -> Result<Page<CheckIn>, DomainError>;
}
