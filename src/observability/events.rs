//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Initial records loaded into the store
    StoreSeeded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// In-flight requests drained
    ShutdownComplete,
    /// Startup failed (FATAL)
    BootFailed,

    // Catalog mutations
    BookCreated,
    BookUpdated,
    BookDeleted,

    // Requests
    /// Request answered with a success status
    RequestComplete,
    /// Request answered with an error status
    RequestRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "BOOT_FAILED",

            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",

            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
