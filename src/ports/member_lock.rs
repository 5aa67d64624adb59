//! MemberLock port - Per-member serialization.
//!
//! Enrollment, rescheduling, and check-in each read state and then write
//! based on it. Holding the member's lock across that sequence makes the
//! check and the write one unit: of two racing requests, the second sees
//! the first's write.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MemberId};

/// Held lock for one member. Released on drop.
#[must_use = "the member lock is released as soon as the guard is dropped"]
pub struct MemberLockGuard {
    _inner: Box<dyn Send>,
}

impl MemberLockGuard {
    /// Wraps an adapter-specific guard whose drop releases the lock.
    pub fn new(inner: impl Send + 'static) -> Self {
        Self {
            _inner: Box::new(inner),
        }
    }
}

impl std::fmt::Debug for MemberLockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberLockGuard").finish_non_exhaustive()
    }
}

/// Port for acquiring an exclusive per-member lock.
///
/// Locks for different members are independent.
#[async_trait]
pub trait MemberLock: Send + Sync {
    /// Waits until the member's lock is free and takes it.
    ///
    /// # Errors
    ///
    /// - `LockUnavailable` if the lock backend cannot be reached
    async fn acquire(&self, member_id: &MemberId) -> Result<MemberLockGuard, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_lock_is_object_safe() {
        fn _accepts_dyn(_lock: &dyn MemberLock) {}
    }

    #[test]
    fn guard_drops_inner_value() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        struct Flag(Arc<AtomicBool>);
        impl Drop for Flag {
            fn drop(&mut self) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let released = Arc::new(AtomicBool::new(false));
        let guard = MemberLockGuard::new(Flag(released.clone()));
        assert!(!released.load(Ordering::SeqCst));
        drop(guard);
        assert!(released.load(Ordering::SeqCst));
    }
}
