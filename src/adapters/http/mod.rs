//! HTTP adapters - REST API over the application handlers.

pub mod attendance;
pub mod error;
pub mod ledger;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::{AppDependencies, AppState};

use axum::Router;

/// Builds the full `/api` router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            ledger::ledger_routes().merge(attendance::attendance_routes()),
        )
        .with_state(state)
}
