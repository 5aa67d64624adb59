//! Axum routes for subscription endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{
    cancel_subscription, edit_subscription, enroll_subscription, get_subscription,
    list_subscriptions,
};

/// Subscription routes, mounted under `/api`.
pub fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/inscriptions", get(list_subscriptions).post(enroll_subscription))
        .route(
            "/inscriptions/:id",
            get(get_subscription)
                .put(edit_subscription)
                .delete(cancel_subscription),
        )
}
