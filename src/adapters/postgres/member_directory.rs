//! PostgreSQL-backed member directory (reads the CRUD service's `members` table).

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::ledger::MemberSummary;
use crate::ports::MemberDirectory;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresMemberDirectory {
    pool: PgPool,
}

impl PostgresMemberDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i64,
    name: String,
    email: String,
}

#[async_trait]
impl MemberDirectory for PostgresMemberDirectory {
    async fn get_member(&self, id: &MemberId) -> Result<Option<MemberSummary>, DomainError> {
        let row: Option<MemberRow> =
            sqlx::query_as("SELECT id, name, email FROM members WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find member: {}", e)))?;

        row.map(|r| {
            MemberId::new(r.id)
                .map(|id| MemberSummary::new(id, r.name, r.email))
                .map_err(|e| DomainError::database(format!("Invalid member id: {}", e)))
        })
        .transpose()
    }
}
