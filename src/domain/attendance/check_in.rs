//! Check-in record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CheckInId, MemberId, Timestamp};

/// A single admitted visit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: CheckInId,
    pub member_id: MemberId,
    /// Server time of admission; never client-supplied.
    pub created_at: Timestamp,
}

impl CheckIn {
    /// Records a check-in for a member at the given instant.
    pub fn record(member_id: MemberId, now: Timestamp) -> Self {
        Self {
            id: CheckInId::new(),
            member_id,
            created_at: now,
        }
    }
}
