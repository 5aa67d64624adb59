//! ListSubscriptionsHandler - Query handler for ongoing and future subscriptions.

use std::sync::Arc;

use crate::domain::foundation::{Page, PageRequest};
use crate::domain::ledger::LedgerError;
use crate::ports::{Clock, SubscriptionRepository};

use super::{SubscriptionEnricher, SubscriptionView};

/// Default page size for subscription listings.
pub const DEFAULT_SUBSCRIPTIONS_PER_PAGE: u32 = 20;

/// Query for one page of subscriptions whose end date has not passed.
#[derive(Debug, Clone, Default)]
pub struct ListSubscriptionsQuery {
    /// 1-based page number; `None` means the first page.
    pub page: Option<u32>,
}

/// Lists subscriptions with `end_date >= now`, latest end date first.
pub struct ListSubscriptionsHandler {
    repository: Arc<dyn SubscriptionRepository>,
    enricher: SubscriptionEnricher,
    clock: Arc<dyn Clock>,
    per_page: u32,
}

impl ListSubscriptionsHandler {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        enricher: SubscriptionEnricher,
        clock: Arc<dyn Clock>,
        per_page: u32,
    ) -> Self {
        Self {
            repository,
            enricher,
            clock,
            per_page,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<Page<SubscriptionView>, LedgerError> {
        let now = self.clock.now();
        let request = PageRequest::new(query.page, self.per_page);

        let page = self.repository.list_ongoing_or_future(now, request).await?;
        let views = self.enricher.enrich_all(page.items, now).await?;

        Ok(Page::new(views, page.total, request))
    }
}
