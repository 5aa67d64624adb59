//! Rolling check-in quota.
//!
//! The window is trailing and recomputed on every call: it covers
//! `[now - window_days, now]`, inclusive at both ends. It is independent
//! of subscription renewals.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp, ValidationError};

use super::AttendanceError;

/// Default number of check-ins admitted per window.
pub const DEFAULT_CHECK_IN_LIMIT: u32 = 5;

/// Default window length in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Limit and window length of the attendance quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaPolicy {
    limit: u32,
    window_days: u32,
}

impl QuotaPolicy {
    pub fn new(limit: u32, window_days: u32) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::out_of_range(
                "limit",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if window_days == 0 {
            return Err(ValidationError::out_of_range(
                "window_days",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self { limit, window_days })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Oldest instant still counted at `now`.
    pub fn window_start(&self, now: Timestamp) -> Timestamp {
        now.minus_days(i64::from(self.window_days))
    }

    /// Admits one more check-in given how many fall inside the window.
    ///
    /// Returns the running count including the new check-in.
    pub fn admit(&self, member_id: MemberId, count_in_window: u64) -> Result<u64, AttendanceError> {
        if count_in_window >= u64::from(self.limit) {
            return Err(AttendanceError::quota_exceeded(
                member_id,
                self.limit,
                self.window_days,
            ));
        }
        Ok(count_in_window + 1)
    }
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CHECK_IN_LIMIT,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn member() -> MemberId {
        MemberId::new(3).unwrap()
    }

    #[test]
    fn default_is_five_per_seven_days() {
        let policy = QuotaPolicy::default();
        assert_eq!(policy.limit(), 5);
        assert_eq!(policy.window_days(), 7);
    }

    #[test]
    fn window_starts_seven_days_back() {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap());
        let start = QuotaPolicy::default().window_start(now);
        assert_eq!(
            start,
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn admits_below_limit_with_running_count() {
        let policy = QuotaPolicy::default();
        assert_eq!(policy.admit(member(), 0).unwrap(), 1);
        assert_eq!(policy.admit(member(), 4).unwrap(), 5);
    }

    #[test]
    fn rejects_at_limit() {
        let err = QuotaPolicy::default().admit(member(), 5).unwrap_err();
        assert_eq!(err, AttendanceError::quota_exceeded(member(), 5, 7));
    }

    #[test]
    fn rejects_zero_limit_or_window() {
        assert!(QuotaPolicy::new(0, 7).is_err());
        assert!(QuotaPolicy::new(5, 0).is_err());
        assert!(QuotaPolicy::new(3, 14).is_ok());
    }
}
