//! HTTP adapter for subscription endpoints.
//!
//! - `POST /api/inscriptions` - Enroll a member
//! - `GET /api/inscriptions` - List ongoing and future subscriptions
//! - `GET /api/inscriptions/:id` - Show one subscription (`null` when absent)
//! - `PUT /api/inscriptions/:id` - Change plan or start date
//! - `DELETE /api/inscriptions/:id` - Cancel

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::ledger_routes;
