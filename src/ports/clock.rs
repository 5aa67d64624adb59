//! Clock port.
//!
//! Every "now" and "today" comparison in the application layer reads time
//! through this port so tests can pin and move it.

use crate::domain::foundation::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
