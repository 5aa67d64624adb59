//! In-memory notification sink for tests.
//!
//! Captures every delivered envelope for assertions and can be switched
//! into a failing mode to exercise the fire-and-forget path.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::NotificationSink;

/// Notification sink that records envelopes in memory.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(InMemoryNotificationSink::new());
/// // ... enroll ...
/// assert!(sink.has_event("subscription.created.v1").await);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryNotificationSink {
    delivered: RwLock<Vec<EventEnvelope>>,
    failing: AtomicBool,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every `notify` call fails.
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.failing.store(true, Ordering::SeqCst);
        sink
    }

    // === Test Helpers ===

    /// Returns all delivered envelopes.
    pub async fn delivered(&self) -> Vec<EventEnvelope> {
        self.delivered.read().await.clone()
    }

    /// Returns envelopes of a specific type.
    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.delivered()
            .await
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Checks if a specific event type was delivered.
    pub async fn has_event(&self, event_type: &str) -> bool {
        self.delivered
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type)
    }

    pub async fn event_count(&self) -> usize {
        self.delivered.read().await.len()
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn notify(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::NotificationFailed,
                "Simulated notification failure",
            ));
        }
        self.delivered.write().await.push(event);
        Ok(())
    }
}
