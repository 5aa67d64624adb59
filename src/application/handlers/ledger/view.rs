//! Read model returned by subscription queries.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, MemberId, PlanId, Timestamp};
use crate::domain::ledger::{MemberSummary, Plan, Subscription};
use crate::ports::{MemberDirectory, PlanCatalog};

/// A subscription with its derived `is_active` flag and related records.
///
/// `plan` and `member` are `None` when the referenced record no longer
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionView {
    pub subscription: Subscription,
    pub is_active: bool,
    pub plan: Option<Plan>,
    pub member: Option<MemberSummary>,
}

/// Joins subscriptions with their plan and member summaries.
#[derive(Clone)]
pub struct SubscriptionEnricher {
    catalog: Arc<dyn PlanCatalog>,
    directory: Arc<dyn MemberDirectory>,
}

impl SubscriptionEnricher {
    pub fn new(catalog: Arc<dyn PlanCatalog>, directory: Arc<dyn MemberDirectory>) -> Self {
        Self { catalog, directory }
    }

    /// Enriches a batch, looking each plan and member up once.
    pub async fn enrich_all(
        &self,
        subscriptions: Vec<Subscription>,
        now: Timestamp,
    ) -> Result<Vec<SubscriptionView>, DomainError> {
        let mut plans: HashMap<PlanId, Option<Plan>> = HashMap::new();
        let mut members: HashMap<MemberId, Option<MemberSummary>> = HashMap::new();
        let mut views = Vec::with_capacity(subscriptions.len());

        for subscription in subscriptions {
            if !plans.contains_key(&subscription.plan_id) {
                let plan = self.catalog.get_plan(&subscription.plan_id).await?;
                plans.insert(subscription.plan_id, plan);
            }
            let plan = plans.get(&subscription.plan_id).cloned().flatten();

            let member = match subscription.member_id {
                Some(member_id) => {
                    if !members.contains_key(&member_id) {
                        let member = self.directory.get_member(&member_id).await?;
                        members.insert(member_id, member);
                    }
                    members.get(&member_id).cloned().flatten()
                }
                None => None,
            };

            views.push(SubscriptionView {
                is_active: subscription.is_active_at(now),
                subscription,
                plan,
                member,
            });
        }

        Ok(views)
    }

    pub async fn enrich(
        &self,
        subscription: Subscription,
        now: Timestamp,
    ) -> Result<SubscriptionView, DomainError> {
        let plan = self.catalog.get_plan(&subscription.plan_id).await?;
        let member = match subscription.member_id {
            Some(member_id) => self.directory.get_member(&member_id).await?,
            None => None,
        };

        Ok(SubscriptionView {
            is_active: subscription.is_active_at(now),
            subscription,
            plan,
            member,
        })
    }
}
