//! CancelSubscriptionHandler - Command handler for deleting a subscription.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ErrorCode, SubscriptionId};
use crate::domain::ledger::LedgerError;
use crate::ports::SubscriptionRepository;

/// Command to cancel a subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub subscription_id: SubscriptionId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionResult {
    pub subscription_id: SubscriptionId,
}

/// Handler for cancelling subscriptions.
///
/// Cancellation is a hard delete. A second call for the same id fails with
/// `SubscriptionNotFound`.
pub struct CancelSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CancelSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(subscription_id = %cmd.subscription_id))]
    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancelSubscriptionResult, LedgerError> {
        self.repository
            .delete(&cmd.subscription_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::SubscriptionNotFound => {
                    LedgerError::subscription_not_found(cmd.subscription_id)
                }
                _ => LedgerError::from(e),
            })?;

        info!("Subscription cancelled");

        Ok(CancelSubscriptionResult {
            subscription_id: cmd.subscription_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::ledger::EnrollSubscriptionCommand;
    use crate::application::handlers::test_support::{at, member, plan, Fixture};

    #[tokio::test]
    async fn cancel_deletes_and_second_call_is_not_found() {
        let fx = Fixture::new();
        let sub = fx
            .enroll()
            .handle(EnrollSubscriptionCommand {
                member_id: member(7),
                plan_id: plan(1),
                start_date: at(2024, 1, 10, 0, 0, 0),
            })
            .await
            .unwrap()
            .subscription;

        let handler = fx.cancel();
        let cmd = CancelSubscriptionCommand {
            subscription_id: sub.id,
        };

        let result = handler.handle(cmd.clone()).await.unwrap();
        assert_eq!(result.subscription_id, sub.id);
        assert!(fx.subscriptions.is_empty().await);

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err, LedgerError::subscription_not_found(sub.id));
    }

    #[tokio::test]
    async fn cancelled_period_frees_the_member() {
        let fx = Fixture::new();
        let enroll = fx.enroll();
        let first = enroll
            .handle(EnrollSubscriptionCommand {
                member_id: member(7),
                plan_id: plan(1),
                start_date: at(2024, 1, 10, 0, 0, 0),
            })
            .await
            .unwrap()
            .subscription;

        fx.cancel()
            .handle(CancelSubscriptionCommand {
                subscription_id: first.id,
            })
            .await
            .unwrap();

        let again = enroll
            .handle(EnrollSubscriptionCommand {
                member_id: member(7),
                plan_id: plan(1),
                start_date: at(2024, 1, 15, 0, 0, 0),
            })
            .await;
        assert!(again.is_ok());
    }
}
