//! Attendance quota handlers.

mod list_check_ins;
mod record_check_in;

pub use list_check_ins::{
    ListCheckInsHandler, ListCheckInsQuery, ListCheckInsResult, DEFAULT_CHECK_INS_PER_PAGE,
};
pub use record_check_in::{RecordCheckInCommand, RecordCheckInHandler, RecordCheckInResult};
