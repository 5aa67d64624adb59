//! PostgreSQL implementation of SubscriptionRepository.
//!
//! The `subscriptions_no_overlap` exclusion constraint rejects overlapping
//! periods for one member even if a writer bypasses the member lock; that
//! violation is reported as `OverlappingSubscription`.

use crate::domain::foundation::{
    DomainError, ErrorCode, MemberId, Page, PageRequest, PlanId, SubscriptionId, Timestamp,
};
use crate::domain::ledger::Subscription;
use crate::ports::SubscriptionRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const OVERLAP_CONSTRAINT: &str = "subscriptions_no_overlap";

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    member_id: Option<i64>,
    plan_id: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    price: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let member_id = row
            .member_id
            .map(MemberId::new)
            .transpose()
            .map_err(|e| DomainError::database(format!("Invalid member_id: {}", e)))?;
        let plan_id = PlanId::new(row.plan_id)
            .map_err(|e| DomainError::database(format!("Invalid plan_id: {}", e)))?;

        Ok(Subscription {
            id: SubscriptionId::from_uuid(row.id),
            member_id,
            plan_id,
            start_date: Timestamp::from_datetime(row.start_date),
            end_date: Timestamp::from_datetime(row.end_date),
            total_price_cents: row.price,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn map_write_error(e: sqlx::Error, subscription: &Subscription, action: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some(OVERLAP_CONSTRAINT) {
            let err = DomainError::new(
                ErrorCode::OverlappingSubscription,
                "Subscription period overlaps another subscription of the member",
            );
            return match subscription.member_id {
                Some(member_id) => err.with_detail("member_id", member_id.to_string()),
                None => err,
            };
        }
    }
    DomainError::database(format!("Failed to {} subscription: {}", action, e))
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::SubscriptionNotFound, "Subscription not found")
}

const COLUMNS: &str =
    "id, member_id, plan_id, start_date, end_date, price, created_at, updated_at";

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, member_id, plan_id, start_date, end_date, price, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.member_id.map(|m| m.as_i64()))
        .bind(subscription.plan_id.as_i64())
        .bind(subscription.start_date.as_datetime())
        .bind(subscription.end_date.as_datetime())
        .bind(subscription.total_price_cents)
        .bind(subscription.created_at.as_datetime())
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, subscription, "save"))?;

        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                plan_id = $2,
                start_date = $3,
                end_date = $4,
                price = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.plan_id.as_i64())
        .bind(subscription.start_date.as_datetime())
        .bind(subscription.end_date.as_datetime())
        .bind(subscription.total_price_cents)
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, subscription, "update"))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> =
            sqlx::query_as(&format!("SELECT {} FROM subscriptions WHERE id = $1", COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find subscription: {}", e)))?;

        row.map(Subscription::try_from).transpose()
    }

    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete subscription: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn find_for_member_ending_on_or_after(
        &self,
        member_id: &MemberId,
        threshold: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE member_id = $1 AND end_date >= $2 ORDER BY start_date",
            COLUMNS
        ))
        .bind(member_id.as_i64())
        .bind(threshold.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find subscriptions: {}", e)))?;

        rows.into_iter().map(Subscription::try_from).collect()
    }

    async fn exists_covering(
        &self,
        member_id: &MemberId,
        at: Timestamp,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM subscriptions
                WHERE member_id = $1 AND start_date <= $2 AND end_date >= $2
            )
            "#,
        )
        .bind(member_id.as_i64())
        .bind(at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to check active subscription: {}", e)))
    }

    async fn list_ongoing_or_future(
        &self,
        now: Timestamp,
        page: PageRequest,
    ) -> Result<Page<Subscription>, DomainError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE end_date >= $1")
                .bind(now.as_datetime())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to count subscriptions: {}", e)))?;

        let rows: Vec<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE end_date >= $1 \
             ORDER BY end_date DESC, id LIMIT $2 OFFSET $3",
            COLUMNS
        ))
        .bind(now.as_datetime())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list subscriptions: {}", e)))?;

        let items = rows
            .into_iter()
            .map(Subscription::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total.max(0) as u64, page))
    }
}
