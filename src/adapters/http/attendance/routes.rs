//! Axum routes for check-in endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{list_check_ins, record_check_in};

/// Check-in routes, mounted under `/api`.
pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/members/:id/checkins", get(list_check_ins).post(record_check_in))
}
