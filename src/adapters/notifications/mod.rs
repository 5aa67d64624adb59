//! Notification sink adapters.

mod in_memory;
mod logging;

pub use in_memory::InMemoryNotificationSink;
pub use logging::LoggingNotificationSink;
