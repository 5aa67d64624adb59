//! In-memory plan catalog.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::ledger::Plan;
use crate::ports::PlanCatalog;

#[derive(Debug, Default)]
pub struct InMemoryPlanCatalog {
    plans: RwLock<HashMap<PlanId, Plan>>,
}

impl InMemoryPlanCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog pre-filled with the given plans.
    pub fn with_plans(plans: impl IntoIterator<Item = Plan>) -> Self {
        Self {
            plans: RwLock::new(plans.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    pub async fn insert(&self, plan: Plan) {
        self.plans.write().await.insert(plan.id, plan);
    }
}

#[async_trait]
impl PlanCatalog for InMemoryPlanCatalog {
    async fn get_plan(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self.plans.read().await.get(id).cloned())
    }
}
