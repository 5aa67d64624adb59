//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, paging, errors)
//! - `ledger` - Subscription periods, plans, and validity rules
//! - `attendance` - Check-ins and the rolling quota

pub mod attendance;
pub mod foundation;
pub mod ledger;
