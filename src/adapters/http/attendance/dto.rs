//! HTTP DTOs for check-in endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ListCheckInsResult, RecordCheckInResult};
use crate::domain::attendance::CheckIn;

use super::super::ledger::MemberResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub id: String,
    pub member_id: i64,
    /// ISO 8601.
    pub created_at: String,
}

impl From<CheckIn> for CheckInResponse {
    fn from(check_in: CheckIn) -> Self {
        Self {
            id: check_in.id.to_string(),
            member_id: check_in.member_id.as_i64(),
            created_at: check_in.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Admitted check-in plus the member's count in the current window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCheckInResponse {
    pub checkin: CheckInResponse,
    pub count: u64,
}

impl From<RecordCheckInResult> for RecordCheckInResponse {
    fn from(result: RecordCheckInResult) -> Self {
        Self {
            checkin: CheckInResponse::from(result.check_in),
            count: result.running_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInPageResponse {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub member: MemberResponse,
    pub checkins: Vec<CheckInResponse>,
}

impl From<ListCheckInsResult> for CheckInPageResponse {
    fn from(result: ListCheckInsResult) -> Self {
        let page = result.check_ins;
        Self {
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            member: MemberResponse::from(result.member),
            checkins: page.items.into_iter().map(CheckInResponse::from).collect(),
        }
    }
}
