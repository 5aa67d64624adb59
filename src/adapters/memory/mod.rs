//! In-memory adapters.
//!
//! Back the test suites and single-process local runs. State lives for the
//! lifetime of the adapter value.

mod check_in_repository;
mod member_directory;
mod member_lock;
mod plan_catalog;
mod subscription_repository;

pub use check_in_repository::InMemoryCheckInRepository;
pub use member_directory::InMemoryMemberDirectory;
pub use member_lock::InProcessMemberLock;
pub use plan_catalog::InMemoryPlanCatalog;
pub use subscription_repository::InMemorySubscriptionRepository;
