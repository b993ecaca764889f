//! Approval workflow for events.
//!
//! Events move Pending → Approved or Pending → Rejected through an
//! explicit administrator review. Administrators bypass review entirely:
//! events they create start out Approved. There is no transition out of
//! Approved or Rejected; a full edit keeps the status it found, and
//! deletion removes the event rather than transitioning it.

use crate::error::ScheduleError;
use crate::types::{EventStatus, Role};

/// An administrator's verdict on a pending event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Approve the event, opening it for registration
    Approve,
    /// Reject the event, releasing its venue slot
    Reject,
}

/// Returns the status a newly created event starts in, based on the
/// creator's privilege.
#[must_use]
pub const fn initial_status(creator: Role) -> EventStatus {
    match creator {
        Role::Admin => EventStatus::Approved,
        Role::User => EventStatus::Pending,
    }
}

/// Applies a review decision to an event's current status.
///
/// # Errors
///
/// Returns [`ScheduleError::Validation`] when the event is not Pending:
/// Approved and Rejected are terminal review states.
pub fn review(current: EventStatus, decision: ReviewDecision) -> Result<EventStatus, ScheduleError> {
    if current != EventStatus::Pending {
        return Err(ScheduleError::Validation(format!(
            "Only pending events can be reviewed (current: {current:?})."
        )));
    }

    Ok(match decision {
        ReviewDecision::Approve => EventStatus::Approved,
        ReviewDecision::Reject => EventStatus::Rejected,
    })
}
