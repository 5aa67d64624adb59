//! EnrollSubscriptionHandler - Command handler for enrolling a member in a plan.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{ErrorCode, MemberId, PlanId, SerializableDomainEvent, Timestamp};
use crate::domain::ledger::{
    ensure_start_not_in_past, find_blocking, LedgerError, MemberSummary, Plan, Subscription,
    SubscriptionEvent,
};
use crate::ports::{Clock, MemberDirectory, MemberLock, NotificationSink, PlanCatalog, SubscriptionRepository};

/// Command to enroll a member.
#[derive(Debug, Clone)]
pub struct EnrollSubscriptionCommand {
    pub member_id: MemberId,
    pub plan_id: PlanId,
    pub start_date: Timestamp,
}

/// Result of a successful enrollment.
#[derive(Debug, Clone)]
pub struct EnrollSubscriptionResult {
    pub subscription: Subscription,
    pub plan: Plan,
    pub member: MemberSummary,
    pub event: SubscriptionEvent,
}

/// Handler for enrolling members.
///
/// The overlap check and the insert run under the member's lock. The
/// welcome notification is sent after the lock is released and its
/// failure never fails the enrollment.
pub struct EnrollSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
    catalog: Arc<dyn PlanCatalog>,
    directory: Arc<dyn MemberDirectory>,
    locks: Arc<dyn MemberLock>,
    notifications: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
}

impl EnrollSubscriptionHandler {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        catalog: Arc<dyn PlanCatalog>,
        directory: Arc<dyn MemberDirectory>,
        locks: Arc<dyn MemberLock>,
        notifications: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            catalog,
            directory,
            locks,
            notifications,
            clock,
        }
    }

    #[tracing::instrument(
        skip(self, cmd),
        fields(member_id = %cmd.member_id, plan_id = %cmd.plan_id)
    )]
    pub async fn handle(
        &self,
        cmd: EnrollSubscriptionCommand,
    ) -> Result<EnrollSubscriptionResult, LedgerError> {
        let now = self.clock.now();

        // 1. Start day must not be before today
        ensure_start_not_in_past(cmd.start_date, now)?;

        // 2. Resolve member and plan
        let member = self
            .directory
            .get_member(&cmd.member_id)
            .await?
            .ok_or_else(|| LedgerError::member_not_found(cmd.member_id))?;
        let plan = self
            .catalog
            .get_plan(&cmd.plan_id)
            .await?
            .ok_or_else(|| LedgerError::plan_not_found(cmd.plan_id))?;

        // 3. Check-then-insert under the member's lock
        let subscription = {
            let _guard = self.locks.acquire(&member.id).await?;

            let candidates = self
                .repository
                .find_for_member_ending_on_or_after(&member.id, cmd.start_date.end_of_day())
                .await?;
            if let Some(blocking) = find_blocking(&candidates, cmd.start_date, None) {
                warn!(blocking_id = %blocking.id, "Enrollment rejected: overlapping subscription");
                return Err(LedgerError::overlapping(member.id));
            }

            let subscription = Subscription::enroll(member.id, &plan, cmd.start_date, now)?;
            self.repository
                .save(&subscription)
                .await
                .map_err(|e| match e.code {
                    ErrorCode::OverlappingSubscription => LedgerError::overlapping(member.id),
                    _ => LedgerError::from(e),
                })?;
            subscription
        };

        info!(
            subscription_id = %subscription.id,
            end_date = %subscription.end_date.as_datetime(),
            total_price_cents = subscription.total_price_cents,
            "Subscription enrolled"
        );

        // 4. Notify (fire-and-forget)
        let event = SubscriptionEvent::created(&subscription, &plan, &member);
        if let Err(e) = self.notifications.notify(event.to_envelope()).await {
            warn!(subscription_id = %subscription.id, error = %e, "Failed to deliver enrollment notification");
        }

        Ok(EnrollSubscriptionResult {
            subscription,
            plan,
            member,
            event,
        })
    }
}
