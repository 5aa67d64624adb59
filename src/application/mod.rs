//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (enroll, edit, cancel, check in) take the member lock
//! around their check-then-write sequences; query handlers only read.

pub mod handlers;

pub use handlers::*;
