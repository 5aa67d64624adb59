//! HTTP DTOs for subscription endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::SubscriptionView;
use crate::domain::foundation::{Page, Timestamp};
use crate::domain::ledger::{MemberSummary, Plan, Subscription};

use super::super::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to enroll a member in a plan.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollSubscriptionRequest {
    pub member_id: i64,
    pub plan_id: i64,
    /// Calendar day (`2024-01-10`) or RFC 3339 instant.
    pub start_date: String,
}

/// Request to change a subscription's plan or start date.
#[derive(Debug, Clone, Deserialize)]
pub struct EditSubscriptionRequest {
    pub plan_id: i64,
    /// Calendar day (`2024-01-10`) or RFC 3339 instant.
    pub start_date: String,
}

/// `?page=` for list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

/// Parses a start date given either as a calendar day or an RFC 3339 instant.
pub fn parse_start_date(raw: &str) -> Result<Timestamp, ApiError> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Timestamp::from_datetime(instant.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Timestamp::from_date)
        .map_err(|_| ApiError::bad_request(format!("Invalid start_date: '{}'", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub title: String,
    /// Months.
    pub duration: u32,
    /// Monthly price in cents.
    pub price: i64,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.as_i64(),
            title: plan.title,
            duration: plan.duration_months,
            price: plan.monthly_price_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<MemberSummary> for MemberResponse {
    fn from(member: MemberSummary) -> Self {
        Self {
            id: member.id.as_i64(),
            name: member.name,
            email: member.email,
        }
    }
}

/// A subscription as returned by every subscription endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub member_id: Option<i64>,
    pub plan_id: i64,
    pub is_active: bool,
    /// ISO 8601.
    pub start_date: String,
    /// ISO 8601.
    pub end_date: String,
    /// Total price in cents.
    pub price: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<MemberResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanResponse>,
}

impl SubscriptionResponse {
    pub fn new(
        subscription: Subscription,
        is_active: bool,
        plan: Option<Plan>,
        member: Option<MemberSummary>,
    ) -> Self {
        Self {
            id: subscription.id.to_string(),
            member_id: subscription.member_id.map(|m| m.as_i64()),
            plan_id: subscription.plan_id.as_i64(),
            is_active,
            start_date: subscription.start_date.as_datetime().to_rfc3339(),
            end_date: subscription.end_date.as_datetime().to_rfc3339(),
            price: subscription.total_price_cents,
            created_at: subscription.created_at.as_datetime().to_rfc3339(),
            updated_at: subscription.updated_at.as_datetime().to_rfc3339(),
            member: member.map(MemberResponse::from),
            plan: plan.map(PlanResponse::from),
        }
    }
}

impl From<SubscriptionView> for SubscriptionResponse {
    fn from(view: SubscriptionView) -> Self {
        Self::new(view.subscription, view.is_active, view.plan, view.member)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPageResponse {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub inscriptions: Vec<SubscriptionResponse>,
}

impl From<Page<SubscriptionView>> for SubscriptionPageResponse {
    fn from(page: Page<SubscriptionView>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            inscriptions: page.items.into_iter().map(SubscriptionResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
