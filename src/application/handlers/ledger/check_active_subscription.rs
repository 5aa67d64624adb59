//! CheckActiveSubscriptionHandler - Answers whether a member's access is
//! currently covered.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::MemberId;
use crate::domain::ledger::LedgerError;
use crate::ports::{Clock, SubscriptionRepository};

/// True iff some subscription of the member has `start_date <= now <= end_date`.
///
/// Reads only; calling it repeatedly at the same instant gives the same
/// answer.
pub struct CheckActiveSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
}

impl CheckActiveSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, member_id: MemberId) -> Result<bool, LedgerError> {
        let now = self.clock.now();
        let active = self.repository.exists_covering(&member_id, now).await?;
        debug!(member_id = %member_id, active, "Checked active subscription");
        Ok(active)
    }
}
