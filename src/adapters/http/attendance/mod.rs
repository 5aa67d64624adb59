//! HTTP adapter for check-in endpoints.
//!
//! - `POST /api/members/:id/checkins` - Record a check-in
//! - `GET /api/members/:id/checkins` - Check-in history, newest first

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::attendance_routes;
