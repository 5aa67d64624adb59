//! ListCheckInsHandler - Query handler for a member's check-in history.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, CheckIn};
use crate::domain::foundation::{MemberId, Page, PageRequest};
use crate::domain::ledger::MemberSummary;
use crate::ports::{CheckInRepository, MemberDirectory};

/// Default page size for check-in listings.
pub const DEFAULT_CHECK_INS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone)]
pub struct ListCheckInsQuery {
    pub member_id: MemberId,
    /// 1-based page number; `None` means the first page.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ListCheckInsResult {
    pub member: MemberSummary,
    pub check_ins: Page<CheckIn>,
}

/// Lists a member's check-ins newest first. Pure read; no quota logic.
pub struct ListCheckInsHandler {
    repository: Arc<dyn CheckInRepository>,
    directory: Arc<dyn MemberDirectory>,
    per_page: u32,
}

impl ListCheckInsHandler {
    pub fn new(
        repository: Arc<dyn CheckInRepository>,
        directory: Arc<dyn MemberDirectory>,
        per_page: u32,
    ) -> Self {
        Self {
            repository,
            directory,
            per_page,
        }
    }

    #[tracing::instrument(skip(self, query), fields(member_id = %query.member_id))]
    pub async fn handle(&self, query: ListCheckInsQuery) -> Result<ListCheckInsResult, AttendanceError> {
        let member = self
            .directory
            .get_member(&query.member_id)
            .await?
            .ok_or_else(|| AttendanceError::member_not_found(query.member_id))?;

        let request = PageRequest::new(query.page, self.per_page);
        let check_ins = self.repository.list_for_member(&member.id, request).await?;

        Ok(ListCheckInsResult { member, check_ins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{member, Fixture};
    use crate::ports::Clock;

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let fx = Fixture::new();
        let err = fx
            .list_check_ins(10)
            .handle(ListCheckInsQuery {
                member_id: member(99),
                page: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, AttendanceError::member_not_found(member(99)));
    }

    #[tokio::test]
    async fn pages_newest_first_with_total() {
        let fx = Fixture::new();
        let start = fx.clock.now();
        for day in 0..13 {
            fx.check_ins
                .save(&CheckIn::record(member(7), start.add_days(day)))
                .await
                .unwrap();
        }

        let handler = fx.list_check_ins(10);
        let first = handler
            .handle(ListCheckInsQuery {
                member_id: member(7),
                page: None,
            })
            .await
            .unwrap();
        assert_eq!(first.member.name, "Ana Lima");
        assert_eq!(first.check_ins.total, 13);
        assert_eq!(first.check_ins.items.len(), 10);
        assert_eq!(first.check_ins.items[0].created_at, start.add_days(12));

        let second = handler
            .handle(ListCheckInsQuery {
                member_id: member(7),
                page: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(second.check_ins.items.len(), 3);
        assert_eq!(second.check_ins.page, 2);
    }

    #[tokio::test]
    async fn member_without_check_ins_gets_empty_page() {
        let fx = Fixture::new();
        let result = fx
            .list_check_ins(10)
            .handle(ListCheckInsQuery {
                member_id: member(8),
                page: None,
            })
            .await
            .unwrap();
        assert_eq!(result.check_ins.total, 0);
        assert!(result.check_ins.items.is_empty());
    }
}
