//! PostgreSQL adapters - Database implementations for the ledger ports.
//!
//! - `PostgresSubscriptionRepository` - Subscription periods
//! - `PostgresCheckInRepository` - Check-in log
//! - `PostgresPlanCatalog` / `PostgresMemberDirectory` - Read-only views of
//!   the plans and members tables
//! - `PostgresAdvisoryLock` - Per-member lock shared across instances, on its
//!   own pool (`create_lock_pool`)

mod advisory_lock;
mod check_in_repository;
mod member_directory;
mod plan_catalog;
mod subscription_repository;

pub use advisory_lock::PostgresAdvisoryLock;
pub use check_in_repository::PostgresCheckInRepository;
pub use member_directory::PostgresMemberDirectory;
pub use plan_catalog::PostgresPlanCatalog;
pub use subscription_repository::PostgresSubscriptionRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens the connection pool described by `config`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))
}

/// Opens the pool that backs `PostgresAdvisoryLock`.
///
/// A held member lock keeps its connection checked out, while the work done
/// under it queries the main pool. Keeping the two apart means lock holders
/// can always reach the database, however many locks are held. Sessions
/// wait at most `acquire_timeout` for a contended member lock.
pub async fn create_lock_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let lock_timeout_ms = config.acquire_timeout().as_millis();
    PgPoolOptions::new()
        .min_connections(0)
        .max_connections(config.lock_max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                conn.execute(format!("SET lock_timeout = {}", lock_timeout_ms).as_str())
                    .await?;
                Ok(())
            })
        })
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to open lock pool: {}", e)))
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
}
