//! HTTP handlers for check-in endpoints.

use std::str::FromStr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{ListCheckInsQuery, RecordCheckInCommand};
use crate::domain::foundation::MemberId;

use super::super::error::ApiError;
use super::super::ledger::PageParams;
use super::super::state::AppState;
use super::dto::{CheckInPageResponse, RecordCheckInResponse};

fn member_id(raw: &str) -> Result<MemberId, ApiError> {
    MemberId::from_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid member id: '{}'", raw)))
}

/// POST /api/members/:id/checkins - Admit a member if within quota
pub async fn record_check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RecordCheckInCommand {
        member_id: member_id(&id)?,
    };

    let result = state.record_check_in.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(RecordCheckInResponse::from(result))))
}

/// GET /api/members/:id/checkins - Paginated history, newest first
pub async fn list_check_ins(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let query = ListCheckInsQuery {
        member_id: member_id(&id)?,
        page: params.page,
    };

    let result = state.list_check_ins.handle(query).await?;

    Ok(Json(CheckInPageResponse::from(result)))
}
