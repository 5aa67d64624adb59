//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - System and fixed clocks
//! - `memory` - In-memory repositories, directories, and the in-process lock
//! - `notifications` - Notification sinks
//! - `postgres` - PostgreSQL repositories and the advisory member lock
//! - `http` - Axum routes over the application handlers

pub mod clock;
pub mod http;
pub mod memory;
pub mod notifications;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
