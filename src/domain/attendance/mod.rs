//! Attendance domain.
//!
//! Check-in records and the rolling quota that gates them.

mod check_in;
mod errors;
mod quota;

pub use check_in::CheckIn;
pub use errors::AttendanceError;
pub use quota::{QuotaPolicy, DEFAULT_CHECK_IN_LIMIT, DEFAULT_WINDOW_DAYS};
