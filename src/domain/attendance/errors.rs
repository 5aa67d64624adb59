//! Attendance-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | MemberNotFound | 404 |
//! | NoActiveSubscription | 403 |
//! | QuotaExceeded | 429 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::ledger::LedgerError;

/// Errors raised while recording or listing check-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// Member does not exist in the directory.
    MemberNotFound(MemberId),

    /// Member holds no subscription covering the current instant.
    NoActiveSubscription(MemberId),

    /// Member has used every check-in allowed in the rolling window.
    QuotaExceeded {
        member_id: MemberId,
        limit: u32,
        window_days: u32,
    },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl AttendanceError {
    pub fn member_not_found(id: MemberId) -> Self {
        AttendanceError::MemberNotFound(id)
    }

    pub fn no_active_subscription(id: MemberId) -> Self {
        AttendanceError::NoActiveSubscription(id)
    }

    pub fn quota_exceeded(member_id: MemberId, limit: u32, window_days: u32) -> Self {
        AttendanceError::QuotaExceeded {
            member_id,
            limit,
            window_days,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AttendanceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AttendanceError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AttendanceError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            AttendanceError::NoActiveSubscription(_) => ErrorCode::NoActiveSubscription,
            AttendanceError::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
            AttendanceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AttendanceError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            AttendanceError::MemberNotFound(id) => format!("Member not found: {}", id),
            AttendanceError::NoActiveSubscription(id) => {
                format!("Member {} has no active subscription", id)
            }
            AttendanceError::QuotaExceeded {
                member_id,
                limit,
                window_days,
            } => format!(
                "Member {} already checked in {} times in the last {} days",
                member_id, limit, window_days
            ),
            AttendanceError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AttendanceError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AttendanceError {}

impl From<DomainError> for AttendanceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AttendanceError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AttendanceError::Infrastructure(err.to_string()),
        }
    }
}

/// Failures from the subscription lookup made while admitting a check-in.
impl From<LedgerError> for AttendanceError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Infrastructure(msg) => AttendanceError::Infrastructure(msg),
            other => AttendanceError::Infrastructure(other.message()),
        }
    }
}

impl From<AttendanceError> for DomainError {
    fn from(err: AttendanceError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> MemberId {
        MemberId::new(4).unwrap()
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            AttendanceError::no_active_subscription(member()).code(),
            ErrorCode::NoActiveSubscription
        );
        assert_eq!(
            AttendanceError::quota_exceeded(member(), 5, 7).code(),
            ErrorCode::QuotaExceeded
        );
        assert_eq!(
            AttendanceError::member_not_found(member()).code(),
            ErrorCode::MemberNotFound
        );
    }

    #[test]
    fn quota_message_names_limit_and_window() {
        let err = AttendanceError::quota_exceeded(member(), 5, 7);
        assert_eq!(
            err.to_string(),
            "Member 4 already checked in 5 times in the last 7 days"
        );
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err = AttendanceError::from(DomainError::database("timeout"));
        assert!(matches!(err, AttendanceError::Infrastructure(_)));
    }

    #[test]
    fn ledger_infrastructure_error_keeps_its_text() {
        let ledger = LedgerError::from(DomainError::database("pool timed out"));
        let err = AttendanceError::from(ledger.clone());

        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.message(), ledger.message());
        assert!(!err.message().starts_with("Error: Error:"));
    }
}
