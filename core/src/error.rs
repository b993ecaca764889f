//! Error types for the campus event engine.
//!
//! Every engine operation returns a structured result; none of these
//! errors abort the caller. The messages are user-facing and surfaced
//! verbatim by UI collaborators. The single environmental failure — the
//! storage collaborator itself — is carried separately as
//! [`StorageError`] and wrapped at the runtime boundary.

use thiserror::Error;

use crate::types::{EventId, VenueId};

/// Recoverable failures of scheduling, workflow, and registration operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Malformed input to event creation or update
    #[error("{0}")]
    Validation(String),

    /// The candidate slot overlaps an existing non-rejected event at the
    /// same venue and date
    #[error("There is already an event at {venue_name} during this time. Please choose a different slot.")]
    SlotConflict {
        /// Display name of the contested venue (or "this venue" when the
        /// reference dangles)
        venue_name: String,
    },

    /// The referenced event does not exist
    #[error("Event not found.")]
    EventNotFound(EventId),

    /// The referenced venue does not exist
    #[error("Venue not found: {0}")]
    VenueNotFound(VenueId),

    /// Registration attempted against a non-approved event
    #[error("Event is not approved for registration.")]
    NotApproved,

    /// Duplicate registration by email
    #[error("You are already registered for this event.")]
    AlreadyRegistered,

    /// The event has reached capacity
    #[error("This event is full.")]
    EventFull,

    /// The storage collaborator failed; environmental, not recoverable
    /// by retrying the operation
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// Failures of the storage collaborator.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(String),

    /// A collection could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}
