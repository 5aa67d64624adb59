//! Attendance quota and listing configuration

use serde::Deserialize;

use crate::application::handlers::attendance::DEFAULT_CHECK_INS_PER_PAGE;
use crate::application::handlers::ledger::DEFAULT_SUBSCRIPTIONS_PER_PAGE;
use crate::domain::attendance::{QuotaPolicy, DEFAULT_CHECK_IN_LIMIT, DEFAULT_WINDOW_DAYS};

use super::error::ValidationError;

/// Quota limits and page sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    /// Check-ins admitted per rolling window
    #[serde(default = "default_limit")]
    pub weekly_check_in_limit: u32,

    /// Rolling window length in days
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Page size for check-in history
    #[serde(default = "default_check_ins_per_page")]
    pub check_ins_per_page: u32,

    /// Page size for subscription listings
    #[serde(default = "default_subscriptions_per_page")]
    pub subscriptions_per_page: u32,
}

impl AttendanceConfig {
    /// Quota policy built from the configured limit and window.
    pub fn quota_policy(&self) -> Result<QuotaPolicy, ValidationError> {
        self.validate()?;
        QuotaPolicy::new(self.weekly_check_in_limit, self.window_days)
            .map_err(|_| ValidationError::InvalidCheckInLimit)
    }

    /// Validate attendance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weekly_check_in_limit == 0 {
            return Err(ValidationError::InvalidCheckInLimit);
        }
        if self.window_days == 0 || self.window_days > 366 {
            return Err(ValidationError::InvalidQuotaWindow);
        }
        for size in [self.check_ins_per_page, self.subscriptions_per_page] {
            if size == 0 || size > 100 {
                return Err(ValidationError::InvalidPageSize);
            }
        }
        Ok(())
    }
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            weekly_check_in_limit: default_limit(),
            window_days: default_window_days(),
            check_ins_per_page: default_check_ins_per_page(),
            subscriptions_per_page: default_subscriptions_per_page(),
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_CHECK_IN_LIMIT
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_check_ins_per_page() -> u32 {
    DEFAULT_CHECK_INS_PER_PAGE
}

fn default_subscriptions_per_page() -> u32 {
    DEFAULT_SUBSCRIPTIONS_PER_PAGE
}
