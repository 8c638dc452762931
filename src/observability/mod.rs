//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//! - Atomic counters
//!
//! Observability is read-only: nothing here changes how a request is served,
//! and a failed log write never fails the caller.
//!
//! # Usage
//!
//! ```
//! use bookshelf::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::BookCreated, &[("id", "4")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_created();
//! assert_eq!(metrics.snapshot().books_created, 1);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_of(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_of(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}
