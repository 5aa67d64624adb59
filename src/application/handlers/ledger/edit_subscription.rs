//! EditSubscriptionHandler - Command handler for moving a subscription to a
//! new plan or start date.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{ErrorCode, PlanId, SubscriptionId, Timestamp};
use crate::domain::ledger::{ensure_start_not_in_past, find_blocking, LedgerError, Plan, Subscription};
use crate::ports::{Clock, MemberDirectory, MemberLock, PlanCatalog, SubscriptionRepository};

/// Command to edit a subscription.
#[derive(Debug, Clone)]
pub struct EditSubscriptionCommand {
    pub subscription_id: SubscriptionId,
    pub plan_id: PlanId,
    pub start_date: Timestamp,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct EditSubscriptionResult {
    pub subscription: Subscription,
    pub plan: Plan,
}

/// Handler for editing subscriptions.
///
/// Checks run in this order: subscription exists, owner exists, not ended,
/// plan exists, start day not in the past, no overlap with the member's
/// other subscriptions. No notification is sent.
pub struct EditSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
    catalog: Arc<dyn PlanCatalog>,
    directory: Arc<dyn MemberDirectory>,
    locks: Arc<dyn MemberLock>,
    clock: Arc<dyn Clock>,
}

impl EditSubscriptionHandler {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        catalog: Arc<dyn PlanCatalog>,
        directory: Arc<dyn MemberDirectory>,
        locks: Arc<dyn MemberLock>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            catalog,
            directory,
            locks,
            clock,
        }
    }

    #[tracing::instrument(
        skip(self, cmd),
        fields(subscription_id = %cmd.subscription_id, plan_id = %cmd.plan_id)
    )]
    pub async fn handle(
        &self,
        cmd: EditSubscriptionCommand,
    ) -> Result<EditSubscriptionResult, LedgerError> {
        // 1. Resolve the subscription and its owner
        let existing = self.load(&cmd.subscription_id).await?;
        let member_id = existing
            .member_id
            .ok_or_else(|| LedgerError::owner_not_found(cmd.subscription_id))?;
        if self.directory.get_member(&member_id).await?.is_none() {
            return Err(LedgerError::owner_not_found(cmd.subscription_id));
        }

        // 2. Everything below reads and writes under the member's lock
        let _guard = self.locks.acquire(&member_id).await?;
        let mut subscription = self.load(&cmd.subscription_id).await?;
        let now = self.clock.now();

        if subscription.has_ended(now) {
            return Err(LedgerError::ended(subscription.id));
        }

        let plan = self
            .catalog
            .get_plan(&cmd.plan_id)
            .await?
            .ok_or_else(|| LedgerError::plan_not_found(cmd.plan_id))?;

        ensure_start_not_in_past(cmd.start_date, now)?;

        // 3. Overlap against the member's other subscriptions
        let candidates = self
            .repository
            .find_for_member_ending_on_or_after(&member_id, cmd.start_date.end_of_day())
            .await?;
        if let Some(blocking) = find_blocking(&candidates, cmd.start_date, Some(subscription.id)) {
            warn!(blocking_id = %blocking.id, "Edit rejected: overlapping subscription");
            return Err(LedgerError::overlapping(member_id));
        }

        // 4. Re-derive terms and persist
        subscription.reschedule(&plan, cmd.start_date, now)?;
        self.repository
            .update(&subscription)
            .await
            .map_err(|e| match e.code {
                ErrorCode::OverlappingSubscription => LedgerError::overlapping(member_id),
                ErrorCode::SubscriptionNotFound => LedgerError::subscription_not_found(subscription.id),
                _ => LedgerError::from(e),
            })?;

        info!(
            end_date = %subscription.end_date.as_datetime(),
            total_price_cents = subscription.total_price_cents,
            "Subscription updated"
        );

        Ok(EditSubscriptionResult { subscription, plan })
    }

    async fn load(&self, id: &SubscriptionId) -> Result<Subscription, LedgerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| LedgerError::subscription_not_found(*id))
    }
}
