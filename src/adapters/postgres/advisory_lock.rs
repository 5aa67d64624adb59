//! PostgreSQL advisory lock implementation of MemberLock.
//!
//! Session-level `pg_advisory_lock` on a pooled connection. The connection
//! stays checked out while the guard lives, so every instance sharing the
//! database serializes work for the same member.
//!
//! The pool passed in must not be the one the repositories use: a lock
//! holder queries through the repositories, and a shared pool exhausted by
//! lock guards would leave it waiting forever. Open it with
//! `create_lock_pool`.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::ports::{MemberLock, MemberLockGuard};

/// First key of the two-key advisory lock space reserved for member locks.
const MEMBER_LOCK_NAMESPACE: i32 = 0x4750_4d4c;

/// Folds a member id into the second advisory key. Two members that fold to
/// the same key only serialize with each other.
fn member_key(member_id: &MemberId) -> i32 {
    let id = member_id.as_i64();
    (id ^ (id >> 32)) as i32
}

pub struct PostgresAdvisoryLock {
    pool: PgPool,
}

impl PostgresAdvisoryLock {
    /// Creates the lock over a dedicated lock pool.
    pub fn new(lock_pool: PgPool) -> Self {
        Self { pool: lock_pool }
    }
}

/// Keeps the locking connection until dropped, then unlocks it.
struct AdvisoryGuard {
    conn: Option<PoolConnection<Postgres>>,
    key: i32,
}

impl Drop for AdvisoryGuard {
    fn drop(&mut self) {
        let Some(mut conn) = self.conn.take() else {
            return;
        };
        let key = self.key;

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let unlocked = sqlx::query("SELECT pg_advisory_unlock($1, $2)")
                        .bind(MEMBER_LOCK_NAMESPACE)
                        .bind(key)
                        .execute(&mut *conn)
                        .await;
                    if let Err(e) = unlocked {
                        warn!(key, error = %e, "Advisory unlock failed, closing connection");
                        // Closing the session releases every lock it holds.
                        drop(conn.detach());
                    }
                });
            }
            Err(_) => drop(conn.detach()),
        }
    }
}

#[async_trait]
impl MemberLock for PostgresAdvisoryLock {
    async fn acquire(&self, member_id: &MemberId) -> Result<MemberLockGuard, DomainError> {
        let key = member_key(member_id);
        let mut conn = self.pool.acquire().await.map_err(|e| {
            DomainError::new(
                ErrorCode::LockUnavailable,
                format!("Failed to acquire connection for member lock: {}", e),
            )
        })?;

        sqlx::query("SELECT pg_advisory_lock($1, $2)")
            .bind(MEMBER_LOCK_NAMESPACE)
            .bind(key)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::LockUnavailable,
                    format!("Failed to lock member {}: {}", member_id, e),
                )
            })?;

        Ok(MemberLockGuard::new(AdvisoryGuard {
            conn: Some(conn),
            key,
        }))
    }
}
