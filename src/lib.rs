//! GymPoint Ledger - Subscription validity and attendance quota engine
//!
//! Tracks which members hold a subscription on which days, keeps each
//! member's subscription periods from overlapping, and caps check-ins to a
//! rolling weekly quota.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
