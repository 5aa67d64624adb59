//! PostgreSQL-backed plan catalog (reads the CRUD service's `plans` table).

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::ledger::Plan;
use crate::ports::PlanCatalog;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPlanCatalog {
    pool: PgPool,
}

impl PostgresPlanCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: i64,
    title: String,
    duration: i32,
    price: i64,
}

impl TryFrom<PlanRow> for Plan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        let id = PlanId::new(row.id)
            .map_err(|e| DomainError::database(format!("Invalid plan id: {}", e)))?;
        let duration = u32::try_from(row.duration)
            .map_err(|_| DomainError::database(format!("Invalid plan duration: {}", row.duration)))?;
        Plan::new(id, row.title, duration, row.price)
            .map_err(|e| DomainError::database(format!("Invalid plan {}: {}", row.id, e)))
    }
}

#[async_trait]
impl PlanCatalog for PostgresPlanCatalog {
    async fn get_plan(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let row: Option<PlanRow> =
            sqlx::query_as("SELECT id, title, duration, price FROM plans WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find plan: {}", e)))?;

        row.map(Plan::try_from).transpose()
    }
}
