//! HTTP handlers for subscription endpoints.

use std::str::FromStr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    CancelSubscriptionCommand, EditSubscriptionCommand, EnrollSubscriptionCommand,
    GetSubscriptionQuery, ListSubscriptionsQuery,
};
use crate::domain::foundation::{MemberId, PlanId, SubscriptionId};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    parse_start_date, EditSubscriptionRequest, EnrollSubscriptionRequest, MessageResponse,
    PageParams, SubscriptionPageResponse, SubscriptionResponse,
};

fn subscription_id(raw: &str) -> Result<SubscriptionId, ApiError> {
    SubscriptionId::from_str(raw)
        .map_err(|_| ApiError::bad_request(format!("Invalid subscription id: '{}'", raw)))
}

fn plan_id(raw: i64) -> Result<PlanId, ApiError> {
    PlanId::new(raw).map_err(|e| ApiError::bad_request(e.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/inscriptions - Ongoing and future subscriptions, latest end first
pub async fn list_subscriptions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let page = state
        .list_subscriptions
        .handle(ListSubscriptionsQuery { page: params.page })
        .await?;

    Ok(Json(SubscriptionPageResponse::from(page)))
}

/// GET /api/inscriptions/:id - One subscription, or `null`
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetSubscriptionQuery {
        subscription_id: subscription_id(&id)?,
    };

    let view = state.get_subscription.handle(query).await?;

    Ok(Json(view.map(SubscriptionResponse::from)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/inscriptions - Enroll a member in a plan
pub async fn enroll_subscription(
    State(state): State<AppState>,
    request: Result<Json<EnrollSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let cmd = EnrollSubscriptionCommand {
        member_id: MemberId::new(request.member_id)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        plan_id: plan_id(request.plan_id)?,
        start_date: parse_start_date(&request.start_date)?,
    };

    let result = state.enroll_subscription.handle(cmd).await?;

    let is_active = result.subscription.is_active_at(state.clock.now());
    let response = SubscriptionResponse::new(
        result.subscription,
        is_active,
        Some(result.plan),
        Some(result.member),
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/inscriptions/:id - Move a subscription to a new plan or start date
pub async fn edit_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<EditSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let cmd = EditSubscriptionCommand {
        subscription_id: subscription_id(&id)?,
        plan_id: plan_id(request.plan_id)?,
        start_date: parse_start_date(&request.start_date)?,
    };

    let result = state.edit_subscription.handle(cmd).await?;

    let is_active = result.subscription.is_active_at(state.clock.now());
    let response = SubscriptionResponse::new(result.subscription, is_active, Some(result.plan), None);

    Ok(Json(response))
}

/// DELETE /api/inscriptions/:id - Cancel a subscription
pub async fn cancel_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CancelSubscriptionCommand {
        subscription_id: subscription_id(&id)?,
    };

    state.cancel_subscription.handle(cmd).await?;

    Ok(Json(MessageResponse {
        message: "Subscription successfully deleted".to_string(),
    }))
}
