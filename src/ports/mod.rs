//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SubscriptionRepository` - Subscription periods
//! - `CheckInRepository` - Append-only check-in records
//!
//! ## Collaborator Ports
//!
//! - `PlanCatalog` - Read-only plan lookup
//! - `MemberDirectory` - Read-only member lookup
//! - `NotificationSink` - Fire-and-forget event delivery
//! - `Clock` - Current instant
//!
//! ## Concurrency Ports
//!
//! - `MemberLock` - Per-member serialization of check-then-act sequences

mod check_in_repository;
mod clock;
mod member_directory;
mod member_lock;
mod notification_sink;
mod plan_catalog;
mod subscription_repository;

pub use check_in_repository::CheckInRepository;
pub use clock::Clock;
pub use member_directory::MemberDirectory;
pub use member_lock::{MemberLock, MemberLockGuard};
pub use notification_sink::NotificationSink;
pub use plan_catalog::PlanCatalog;
pub use subscription_repository::SubscriptionRepository;
