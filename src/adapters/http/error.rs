//! API error type shared by every route.
//!
//! | Kind | Status |
//! |------|--------|
//! | Plan/member/subscription/owner not found | 404 |
//! | Validation, invalid start date | 400 |
//! | Overlapping subscription, ended subscription | 409 |
//! | No active subscription | 403 |
//! | Quota exceeded | 429 |
//! | Infrastructure | 500 |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::attendance::AttendanceError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ledger::LedgerError;

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// An error on its way out as an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A malformed request that never reached the application layer.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::PlanNotFound
            | ErrorCode::MemberNotFound
            | ErrorCode::SubscriptionNotFound
            | ErrorCode::OwnerNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationFailed | ErrorCode::InvalidStartDate => StatusCode::BAD_REQUEST,
            ErrorCode::OverlappingSubscription | ErrorCode::SubscriptionEnded => {
                StatusCode::CONFLICT
            }
            ErrorCode::NoActiveSubscription => StatusCode::FORBIDDEN,
            ErrorCode::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::DatabaseError
            | ErrorCode::LockUnavailable
            | ErrorCode::NotificationFailed
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl From<AttendanceError> for ApiError {
    fn from(err: AttendanceError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::new(err.code, err.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Persistence details stay in the logs.
            error!(code = %self.code, error = %self.message, "Request failed");
            "Internal server error".to_string()
        } else {
            self.message
        };

        let body = ErrorResponse {
            code: self.code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MemberId, PlanId, SubscriptionId};

    fn member() -> MemberId {
        MemberId::new(7).unwrap()
    }

    #[test]
    fn not_found_kinds_map_to_404() {
        let errors: Vec<ApiError> = vec![
            LedgerError::plan_not_found(PlanId::new(1).unwrap()).into(),
            LedgerError::member_not_found(member()).into(),
            LedgerError::subscription_not_found(SubscriptionId::new()).into(),
            LedgerError::owner_not_found(SubscriptionId::new()).into(),
            AttendanceError::member_not_found(member()).into(),
        ];
        for err in errors {
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn conflicts_map_to_409() {
        let overlap: ApiError = LedgerError::overlapping(member()).into();
        let ended: ApiError = LedgerError::ended(SubscriptionId::new()).into();
        assert_eq!(overlap.status(), StatusCode::CONFLICT);
        assert_eq!(ended.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn attendance_rejections_have_distinct_statuses() {
        let inactive: ApiError = AttendanceError::no_active_subscription(member()).into();
        let quota: ApiError = AttendanceError::quota_exceeded(member(), 5, 7).into();
        assert_eq!(inactive.status(), StatusCode::FORBIDDEN);
        assert_eq!(quota.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let err: ApiError = DomainError::database("connection reset").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let response = ApiError::from(DomainError::database("password=hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "DATABASE_ERROR");
        assert_eq!(body.message, "Internal server error");
    }

    #[tokio::test]
    async fn client_errors_carry_the_domain_message() {
        let response = ApiError::from(LedgerError::overlapping(member())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "OVERLAPPING_SUBSCRIPTION");
        assert_eq!(body.message, LedgerError::overlapping(member()).message());
    }
}
