//! Catalog plan value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, ValidationError};

/// Longest plan the catalog may define (ten years).
pub const MAX_DURATION_MONTHS: u32 = 120;

/// Immutable catalog entry a subscription is priced from.
///
/// # Invariants
///
/// - `duration_months` is in `1..=MAX_DURATION_MONTHS`
/// - `monthly_price_cents` is non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub title: String,
    pub duration_months: u32,
    pub monthly_price_cents: i64,
}

impl Plan {
    /// Creates a plan, validating duration and price.
    pub fn new(
        id: PlanId,
        title: impl Into<String>,
        duration_months: u32,
        monthly_price_cents: i64,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if duration_months == 0 || duration_months > MAX_DURATION_MONTHS {
            return Err(ValidationError::out_of_range(
                "duration_months",
                1,
                i64::from(MAX_DURATION_MONTHS),
                i64::from(duration_months),
            ));
        }
        if monthly_price_cents < 0 {
            return Err(ValidationError::out_of_range(
                "monthly_price_cents",
                0,
                i64::MAX,
                monthly_price_cents,
            ));
        }

        Ok(Self {
            id,
            title,
            duration_months,
            monthly_price_cents,
        })
    }

    /// Price of the whole plan: monthly price times duration.
    ///
    /// Returns `None` on overflow.
    pub fn total_price_cents(&self) -> Option<i64> {
        self.monthly_price_cents
            .checked_mul(i64::from(self.duration_months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_id() -> PlanId {
        PlanId::new(1).unwrap()
    }

    #[test]
    fn total_price_is_monthly_times_duration() {
        let plan = Plan::new(plan_id(), "Gold", 6, 8_900).unwrap();
        assert_eq!(plan.total_price_cents(), Some(53_400));
    }

    #[test]
    fn free_plan_is_allowed() {
        let plan = Plan::new(plan_id(), "Trial", 1, 0).unwrap();
        assert_eq!(plan.total_price_cents(), Some(0));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = Plan::new(plan_id(), "Broken", 0, 100).unwrap_err();
        assert_eq!(err.field(), "duration_months");
    }

    #[test]
    fn rejects_negative_price() {
        assert!(Plan::new(plan_id(), "Refund", 1, -1).is_err());
    }

    #[test]
    fn rejects_blank_title() {
        assert!(Plan::new(plan_id(), "   ", 1, 100).is_err());
    }

    #[test]
    fn total_price_overflow_is_none() {
        let plan = Plan::new(plan_id(), "Whale", 120, i64::MAX / 2).unwrap();
        assert_eq!(plan.total_price_cents(), None);
    }
}
