//! RecordCheckInHandler - Command handler for admitting a member.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::handlers::ledger::CheckActiveSubscriptionHandler;
use crate::domain::attendance::{AttendanceError, CheckIn, QuotaPolicy};
use crate::domain::foundation::MemberId;
use crate::ports::{CheckInRepository, Clock, MemberLock};

/// Command to record a check-in.
#[derive(Debug, Clone)]
pub struct RecordCheckInCommand {
    pub member_id: MemberId,
}

/// Result of an admitted check-in.
#[derive(Debug, Clone)]
pub struct RecordCheckInResult {
    pub check_in: CheckIn,
    /// Check-ins in the current window, including this one.
    pub running_count: u64,
}

/// Handler for recording check-ins.
///
/// The subscription check, the window count, and the insert run under the
/// member's lock, so concurrent check-ins cannot both take the last slot.
pub struct RecordCheckInHandler {
    repository: Arc<dyn CheckInRepository>,
    subscriptions: Arc<CheckActiveSubscriptionHandler>,
    locks: Arc<dyn MemberLock>,
    clock: Arc<dyn Clock>,
    policy: QuotaPolicy,
}

impl RecordCheckInHandler {
    pub fn new(
        repository: Arc<dyn CheckInRepository>,
        subscriptions: Arc<CheckActiveSubscriptionHandler>,
        locks: Arc<dyn MemberLock>,
        clock: Arc<dyn Clock>,
        policy: QuotaPolicy,
    ) -> Self {
        Self {
            repository,
            subscriptions,
            locks,
            clock,
            policy,
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(member_id = %cmd.member_id))]
    pub async fn handle(
        &self,
        cmd: RecordCheckInCommand,
    ) -> Result<RecordCheckInResult, AttendanceError> {
        let _guard = self.locks.acquire(&cmd.member_id).await?;

        // 1. Member must hold a subscription covering now
        let active = self.subscriptions.handle(cmd.member_id).await?;
        if !active {
            warn!("Check-in rejected: no active subscription");
            return Err(AttendanceError::no_active_subscription(cmd.member_id));
        }

        // 2. Count the trailing window
        let now = self.clock.now();
        let count = self
            .repository
            .count_between(&cmd.member_id, self.policy.window_start(now), now)
            .await?;
        debug!(count, limit = self.policy.limit(), "Counted check-ins in window");

        // 3. Admit or reject
        let running_count = self.policy.admit(cmd.member_id, count).map_err(|e| {
            warn!(count, "Check-in rejected: quota exceeded");
            e
        })?;

        // 4. Persist
        let check_in = CheckIn::record(cmd.member_id, now);
        self.repository.save(&check_in).await?;

        info!(check_in_id = %check_in.id, running_count, "Check-in recorded");

        Ok(RecordCheckInResult {
            check_in,
            running_count,
        })
    }
}
