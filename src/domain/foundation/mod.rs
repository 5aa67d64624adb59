//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, pagination, and error types
//! that form the vocabulary of the ledger and attendance domains.

mod errors;
mod events;
mod ids;
mod page;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::{CheckInId, MemberId, PlanId, SubscriptionId};
pub use page::{Page, PageRequest};
pub use timestamp::Timestamp;
