//! NotificationSink port - Outbound notifications for domain events.
//!
//! The mail collaborator consumes `subscription.created.v1` envelopes to
//! send the welcome message.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for handing domain events to an external notifier.
///
/// Delivery is fire-and-forget from the caller's point of view: handlers
/// log a failed `notify` and carry on. Implementations should still return
/// errors rather than swallow them so the failure is visible in logs.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one event.
    async fn notify(&self, event: EventEnvelope) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[test]
    fn notification_sink_is_object_safe() {
        fn _accepts_dyn(_sink: &dyn NotificationSink) {}
    }
}
