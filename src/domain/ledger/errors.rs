//! Ledger-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | PlanNotFound | 404 |
//! | MemberNotFound | 404 |
//! | SubscriptionNotFound | 404 |
//! | OwnerNotFound | 404 |
//! | InvalidStartDate | 400 |
//! | ValidationFailed | 400 |
//! | OverlappingSubscription | 409 |
//! | SubscriptionEnded | 409 |
//! | Infrastructure | 500 |

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, PlanId, SubscriptionId};

/// Errors raised by subscription ledger operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Referenced plan does not exist in the catalog.
    PlanNotFound(PlanId),

    /// Referenced member does not exist in the directory.
    MemberNotFound(MemberId),

    /// Subscription was not found.
    SubscriptionNotFound(SubscriptionId),

    /// Subscription's owning member no longer exists.
    OwnerNotFound(SubscriptionId),

    /// Requested start date falls on a calendar day before today.
    InvalidStartDate { start: NaiveDate, today: NaiveDate },

    /// Member already holds a subscription that reaches the requested start.
    OverlappingSubscription { member_id: MemberId },

    /// Subscription's end date is already in the past.
    SubscriptionEnded(SubscriptionId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl LedgerError {
    pub fn plan_not_found(id: PlanId) -> Self {
        LedgerError::PlanNotFound(id)
    }

    pub fn member_not_found(id: MemberId) -> Self {
        LedgerError::MemberNotFound(id)
    }

    pub fn subscription_not_found(id: SubscriptionId) -> Self {
        LedgerError::SubscriptionNotFound(id)
    }

    pub fn owner_not_found(id: SubscriptionId) -> Self {
        LedgerError::OwnerNotFound(id)
    }

    pub fn invalid_start_date(start: NaiveDate, today: NaiveDate) -> Self {
        LedgerError::InvalidStartDate { start, today }
    }

    pub fn overlapping(member_id: MemberId) -> Self {
        LedgerError::OverlappingSubscription { member_id }
    }

    pub fn ended(id: SubscriptionId) -> Self {
        LedgerError::SubscriptionEnded(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LedgerError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        LedgerError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            LedgerError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            LedgerError::SubscriptionNotFound(_) => ErrorCode::SubscriptionNotFound,
            LedgerError::OwnerNotFound(_) => ErrorCode::OwnerNotFound,
            LedgerError::InvalidStartDate { .. } => ErrorCode::InvalidStartDate,
            LedgerError::OverlappingSubscription { .. } => ErrorCode::OverlappingSubscription,
            LedgerError::SubscriptionEnded(_) => ErrorCode::SubscriptionEnded,
            LedgerError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            LedgerError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            LedgerError::PlanNotFound(id) => format!("Plan not found: {}", id),
            LedgerError::MemberNotFound(id) => format!("Member not found: {}", id),
            LedgerError::SubscriptionNotFound(id) => format!("Subscription not found: {}", id),
            LedgerError::OwnerNotFound(id) => {
                format!("Member owning subscription {} no longer exists", id)
            }
            LedgerError::InvalidStartDate { start, today } => {
                format!("Start date {} is before today ({})", start, today)
            }
            LedgerError::OverlappingSubscription { member_id } => format!(
                "Member {} already has a subscription covering the requested start date",
                member_id
            ),
            LedgerError::SubscriptionEnded(id) => {
                format!("Subscription {} has already ended", id)
            }
            LedgerError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            LedgerError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Infrastructure(_))
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LedgerError {}

impl From<DomainError> for LedgerError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => LedgerError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::OverlappingSubscription => match err
                .details
                .get("member_id")
                .and_then(|raw| raw.parse::<MemberId>().ok())
            {
                Some(member_id) => LedgerError::OverlappingSubscription { member_id },
                None => LedgerError::Infrastructure(err.to_string()),
            },
            _ => LedgerError::Infrastructure(err.to_string()),
        }
    }
}

impl From<LedgerError> for DomainError {
    fn from(err: LedgerError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
