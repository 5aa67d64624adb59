//! GetSubscriptionHandler - Query handler for a single subscription.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::ledger::LedgerError;
use crate::ports::{Clock, SubscriptionRepository};

use super::{SubscriptionEnricher, SubscriptionView};

#[derive(Debug, Clone)]
pub struct GetSubscriptionQuery {
    pub subscription_id: SubscriptionId,
}

/// Fetches one subscription. An unknown id is `Ok(None)`, not an error.
pub struct GetSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
    enricher: SubscriptionEnricher,
    clock: Arc<dyn Clock>,
}

impl GetSubscriptionHandler {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        enricher: SubscriptionEnricher,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            enricher,
            clock,
        }
    }

    #[tracing::instrument(skip(self, query), fields(subscription_id = %query.subscription_id))]
    pub async fn handle(
        &self,
        query: GetSubscriptionQuery,
    ) -> Result<Option<SubscriptionView>, LedgerError> {
        match self.repository.find_by_id(&query.subscription_id).await? {
            Some(subscription) => Ok(Some(
                self.enricher.enrich(subscription, self.clock.now()).await?,
            )),
            None => Ok(None),
        }
    }
}
