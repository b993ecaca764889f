//! Domain types for the campus event engine.
//!
//! This module contains the value objects and entities shared by the
//! scheduling, workflow, and registration rules. Identifiers are
//! string-backed so they survive round-trips through the persisted JSON
//! collections unchanged; fresh identifiers are generated as UUIDs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ScheduleError;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a venue
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueId(String);

impl VenueId {
    /// Creates a `VenueId` from an existing identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random `VenueId`
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an event
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    /// Creates an `EventId` from an existing identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random `EventId`
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Value Objects
// ============================================================================

/// Privilege level of the actor performing an operation.
///
/// Resolved by the external identity collaborator and passed into the
/// engine; the engine never inspects credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular user: created events await review
    User,
    /// Administrator: created events bypass review, may approve/reject
    Admin,
}

impl Role {
    /// Checks whether this role carries administrator privilege
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Maximum number of attendees an event admits
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Capacity(pub u32);

impl Capacity {
    /// Creates a new `Capacity`
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the capacity value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Approval lifecycle status of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    /// Awaiting administrator review (not open for registration)
    Pending,
    /// Approved: visible in listings and open for registration
    Approved,
    /// Rejected: kept for audit, exempt from conflict checks
    Rejected,
}

// ============================================================================
// Entities
// ============================================================================

/// A bookable location on campus
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier
    pub id: VenueId,
    /// Display name (e.g. "Main Auditorium")
    pub name: String,
}

impl Venue {
    /// Creates a new `Venue`
    #[must_use]
    pub const fn new(id: VenueId, name: String) -> Self {
        Self { id, name }
    }

    /// Placeholder venue for a dangling reference.
    ///
    /// Events hold weak references to venues; when the referenced venue has
    /// been deleted, enriched listings degrade to this placeholder rather
    /// than fail.
    #[must_use]
    pub fn unknown(id: VenueId) -> Self {
        Self {
            id,
            name: "Unknown Venue".to_string(),
        }
    }
}

/// A registration record embedded in an event, keyed by email
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address (unique within an event's attendee list)
    pub email: String,
    /// Display name
    pub name: String,
    /// Department the attendee belongs to
    pub department: String,
    /// Class section
    pub section: String,
    /// Year of study ("1" through "4" in practice)
    pub year: String,
}

/// A scheduled activity at a venue on a date and time window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub id: EventId,
    /// Event title
    pub title: String,
    /// Event description
    pub description: String,
    /// Calendar day the event takes place on
    pub date: NaiveDate,
    /// Start of the time window (same-day, strictly before `end_time`)
    pub start_time: NaiveTime,
    /// End of the time window
    pub end_time: NaiveTime,
    /// Weak reference to the hosting venue (may dangle)
    pub venue_id: VenueId,
    /// Maximum number of attendees
    pub max_attendees: Capacity,
    /// Optional opaque poster blob (carried, never interpreted)
    pub poster: Option<String>,
    /// Email of the organizer who created the event
    pub organizer_email: String,
    /// Approval lifecycle status
    pub status: EventStatus,
    /// Registered attendees, in registration order, unique by email
    pub attendees: Vec<Attendee>,
    /// Coordinator names, comma-separated free text
    pub coordinators: String,
    /// Department or club hosting the event
    pub department: String,
}

impl Event {
    /// Checks whether the event has reached capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.attendees.len() >= self.max_attendees.value() as usize
    }

    /// Checks whether an attendee with the given email is registered
    #[must_use]
    pub fn has_attendee(&self, email: &str) -> bool {
        self.attendees.iter().any(|a| a.email == email)
    }
}

/// Input for creating or editing an event.
///
/// Carries every [`Event`] field except the identifier, status, and
/// attendee list, which the engine controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title
    pub title: String,
    /// Event description
    pub description: String,
    /// Calendar day
    pub date: NaiveDate,
    /// Start of the time window
    pub start_time: NaiveTime,
    /// End of the time window
    pub end_time: NaiveTime,
    /// Hosting venue reference
    pub venue_id: VenueId,
    /// Maximum number of attendees
    pub max_attendees: Capacity,
    /// Optional opaque poster blob
    pub poster: Option<String>,
    /// Email of the organizer
    pub organizer_email: String,
    /// Coordinator names, comma-separated free text
    pub coordinators: String,
    /// Department or club hosting the event
    pub department: String,
}

impl EventDraft {
    /// Validates the draft's required fields, capacity, and time window.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Validation`] when a required field is empty,
    /// the capacity is zero, or the time window is not strictly increasing.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.title.is_empty()
            || self.description.is_empty()
            || self.department.is_empty()
            || self.coordinators.is_empty()
            || self.venue_id.as_str().is_empty()
            || self.organizer_email.is_empty()
        {
            return Err(ScheduleError::Validation(
                "Please fill all required fields.".to_string(),
            ));
        }

        if self.max_attendees.value() == 0 {
            return Err(ScheduleError::Validation(
                "Maximum attendees must be greater than zero.".to_string(),
            ));
        }

        if self.start_time >= self.end_time {
            return Err(ScheduleError::Validation(
                "Event must end after it starts.".to_string(),
            ));
        }

        Ok(())
    }
}

/// An event joined to its resolved venue.
///
/// The join never fails: a dangling venue reference resolves to
/// [`Venue::unknown`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventWithVenue {
    /// The event record
    pub event: Event,
    /// The resolved (or placeholder) venue
    pub venue: Venue,
}
