//! PostgreSQL implementation of CheckInRepository.

use crate::domain::attendance::CheckIn;
use crate::domain::foundation::{
    CheckInId, DomainError, MemberId, Page, PageRequest, Timestamp,
};
use crate::ports::CheckInRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresCheckInRepository {
    pool: PgPool,
}

impl PostgresCheckInRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CheckInRow {
    id: Uuid,
    member_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<CheckInRow> for CheckIn {
    type Error = DomainError;

    fn try_from(row: CheckInRow) -> Result<Self, Self::Error> {
        Ok(CheckIn {
            id: CheckInId::from_uuid(row.id),
            member_id: MemberId::new(row.member_id)
                .map_err(|e| DomainError::database(format!("Invalid member_id: {}", e)))?,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl CheckInRepository for PostgresCheckInRepository {
    async fn save(&self, check_in: &CheckIn) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO check_ins (id, member_id, created_at) VALUES ($1, $2, $3)")
            .bind(check_in.id.as_uuid())
            .bind(check_in.member_id.as_i64())
            .bind(check_in.created_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to save check-in: {}", e)))?;

        Ok(())
    }

    async fn count_between(
        &self,
        member_id: &MemberId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM check_ins
            WHERE member_id = $1 AND created_at >= $2 AND created_at <= $3
            "#,
        )
        .bind(member_id.as_i64())
        .bind(from.as_datetime())
        .bind(to.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to count check-ins: {}", e)))?;

        Ok(count.max(0) as u64)
    }

    async fn list_for_member(
        &self,
        member_id: &MemberId,
        page: PageRequest,
    ) -> Result<Page<CheckIn>, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM check_ins WHERE member_id = $1")
            .bind(member_id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count check-ins: {}", e)))?;

        let rows: Vec<CheckInRow> = sqlx::query_as(
            r#"
            SELECT id, member_id, created_at FROM check_ins
            WHERE member_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(member_id.as_i64())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list check-ins: {}", e)))?;

        let items = rows
            .into_iter()
            .map(CheckIn::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total.max(0) as u64, page))
    }
}
