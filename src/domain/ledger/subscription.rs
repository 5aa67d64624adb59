//! Subscription aggregate and its temporal rules.
//!
//! A subscription covers the closed interval `[start_date, end_date]`:
//!
//! - `start_date` is midnight UTC of the requested day
//! - `end_date` is `end_of_day(start) + duration_months` calendar months
//! - `is_active` is never stored; it is recomputed from the clock on read
//!
//! The functions in this module are pure. Locking and persistence live in
//! the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, PlanId, SubscriptionId, Timestamp};

use super::{LedgerError, Plan};

/// Derived bounds and price of a subscription for a given plan and start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionTerms {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub total_price_cents: i64,
}

impl SubscriptionTerms {
    /// Derives the period and price from a plan.
    ///
    /// `end_date` is the end of the start day plus the plan duration in
    /// calendar months, clamped to the last day of shorter months.
    pub fn derive(plan: &Plan, requested_start: Timestamp) -> Result<Self, LedgerError> {
        let end_date = requested_start
            .end_of_day()
            .add_months(plan.duration_months)
            .ok_or_else(|| LedgerError::validation("start_date", "end date is out of range"))?;
        let total_price_cents = plan
            .total_price_cents()
            .ok_or_else(|| LedgerError::validation("plan_id", "plan price overflows"))?;

        Ok(Self {
            start_date: requested_start.start_of_day(),
            end_date,
            total_price_cents,
        })
    }
}

/// Rejects a start whose calendar day is before today.
///
/// Any time of day on the current date is accepted.
pub fn ensure_start_not_in_past(requested_start: Timestamp, now: Timestamp) -> Result<(), LedgerError> {
    let start = requested_start.date();
    let today = now.date();
    if start < today {
        return Err(LedgerError::invalid_start_date(start, today));
    }
    Ok(())
}

/// `start ≤ now ≤ end`, inclusive at both ends.
pub fn is_active_between(start_date: Timestamp, end_date: Timestamp, now: Timestamp) -> bool {
    start_date <= now && now <= end_date
}

/// Finds the first subscription that blocks a new period starting on the
/// given day.
///
/// A subscription blocks when its `end_date` reaches the end of the
/// candidate's start day, which covers both running and future-scheduled
/// subscriptions. `exclude` skips the subscription being edited.
pub fn find_blocking<'a, I>(
    existing: I,
    requested_start: Timestamp,
    exclude: Option<SubscriptionId>,
) -> Option<&'a Subscription>
where
    I: IntoIterator<Item = &'a Subscription>,
{
    let end_of_start_day = requested_start.end_of_day();
    existing
        .into_iter()
        .filter(|s| Some(s.id) != exclude)
        .find(|s| s.end_date >= end_of_start_day)
}

/// A time-bounded grant of facility access for one member.
///
/// # Invariants
///
/// - `start_date` is at 00:00:00.000 UTC
/// - `start_date < end_date`
/// - intervals of one member never share a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    /// `None` once the owning member has been removed from the directory.
    pub member_id: Option<MemberId>,
    pub plan_id: PlanId,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub total_price_cents: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Creates a new subscription for a member on a plan.
    ///
    /// Validates the start day against `now` and derives end date and
    /// price. Overlap with other subscriptions is checked by the caller.
    pub fn enroll(
        member_id: MemberId,
        plan: &Plan,
        requested_start: Timestamp,
        now: Timestamp,
    ) -> Result<Self, LedgerError> {
        ensure_start_not_in_past(requested_start, now)?;
        let terms = SubscriptionTerms::derive(plan, requested_start)?;

        Ok(Self {
            id: SubscriptionId::new(),
            member_id: Some(member_id),
            plan_id: plan.id,
            start_date: terms.start_date,
            end_date: terms.end_date,
            total_price_cents: terms.total_price_cents,
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves the subscription onto a (possibly different) plan and start.
    ///
    /// # Errors
    ///
    /// - `SubscriptionEnded` if the current period ended before today
    /// - `InvalidStartDate` if the new start day is before today
    pub fn reschedule(
        &mut self,
        plan: &Plan,
        requested_start: Timestamp,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if self.has_ended(now) {
            return Err(LedgerError::ended(self.id));
        }
        ensure_start_not_in_past(requested_start, now)?;
        let terms = SubscriptionTerms::derive(plan, requested_start)?;

        self.plan_id = plan.id;
        self.start_date = terms.start_date;
        self.end_date = terms.end_date;
        self.total_price_cents = terms.total_price_cents;
        self.updated_at = now;
        Ok(())
    }

    /// Returns true if `now` falls within `[start_date, end_date]`.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        is_active_between(self.start_date, self.end_date, now)
    }

    /// Returns true if the period ended before today's calendar day.
    pub fn has_ended(&self, now: Timestamp) -> bool {
        self.end_date < now.start_of_day()
    }

    /// Returns true if the subscription is still running or scheduled.
    pub fn is_ongoing_or_future(&self, now: Timestamp) -> bool {
        self.end_date >= now
    }
}
