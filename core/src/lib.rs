//! # Campus Events Core
//!
//! Domain types and pure rules for the campus event-scheduling and
//! registration engine.
//!
//! This crate is the functional core: it knows how to decide whether a
//! time slot is legal, how an event moves through the approval workflow,
//! and whether a registration is admitted — but it performs no I/O. The
//! imperative shell (`campus-events-runtime`) drives these rules against a
//! storage collaborator.
//!
//! ## Core Concepts
//!
//! - **Types**: [`Venue`], [`Event`], [`Attendee`] and their identifiers
//! - **Conflict resolution**: half-open interval overlap at a venue/date
//! - **Approval workflow**: the Pending/Approved/Rejected state machine
//! - **Registration rules**: capacity, uniqueness, and status gating
//! - **Collaborator seams**: [`StateStore`](state_store::StateStore) and
//!   [`Clock`](environment::Clock) traits injected into the runtime
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Explicit results (no panics, no exceptions-as-control-flow)
//! - Dependency injection via traits

pub mod change;
pub mod conflict;
pub mod environment;
pub mod error;
pub mod registration;
pub mod state_store;
pub mod types;
pub mod workflow;

pub use change::DataChange;
pub use error::{ScheduleError, StorageError};
pub use types::{
    Attendee, Capacity, Event, EventDraft, EventId, EventStatus, EventWithVenue, Role, Venue,
    VenueId,
};
