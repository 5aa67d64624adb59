//! Plan catalog port.
//!
//! Plans are owned by the catalog service; the ledger only reads them.

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::ledger::Plan;
use async_trait::async_trait;

/// Read-only access to catalog plans.
#[async_trait]
pub trait PlanCatalog: Send + Sync {
    /// Look up a plan by ID.
    ///
    /// Returns `None` if the plan does not exist.
    async fn get_plan(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;
}
