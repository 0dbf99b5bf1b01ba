//! Error-reporting collaborator.
//!
//! Failures crossing the route boundary are handed to an [`ErrorReporter`]
//! before the error view renders, so nothing is swallowed. The default
//! implementation writes structured log records; a real tracker can be
//! swapped in behind the same trait.

use uuid::Uuid;

use crate::services::ServiceError;

/// Forwards route-boundary failures to an external tracker.
pub trait ErrorReporter: Send + Sync {
    /// Records the error and returns the event id it was filed under.
    fn report(&self, error: &ServiceError) -> Uuid;
}

/// Reporter writing structured log records, one event id per failure.
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &ServiceError) -> Uuid {
        let event_id = Uuid::new_v4();
        log::error!("[event {event_id}] unhandled service error: {error}");
        event_id
    }
}
