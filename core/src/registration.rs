//! Registration admission and withdrawal rules.
//!
//! Pure decisions over a single event snapshot. The runtime store applies
//! them inside its write lock: existence of the event is the caller's
//! first precondition, then the checks here run in order — status gate,
//! duplicate email, capacity — and the first failure wins.

use crate::error::ScheduleError;
use crate::types::{Attendee, Event, EventStatus};

/// Decides whether an attendee may register for the event.
///
/// Checks, in order: the event is Approved, the email is not already
/// registered, and capacity remains. An event is full exactly when its
/// attendee count equals its maximum.
///
/// # Errors
///
/// - [`ScheduleError::NotApproved`] when the event is Pending or Rejected
/// - [`ScheduleError::AlreadyRegistered`] on a duplicate email
/// - [`ScheduleError::EventFull`] when capacity is exhausted
pub fn admit(event: &Event, attendee: &Attendee) -> Result<(), ScheduleError> {
    if event.status != EventStatus::Approved {
        return Err(ScheduleError::NotApproved);
    }

    if event.has_attendee(&attendee.email) {
        return Err(ScheduleError::AlreadyRegistered);
    }

    if event.is_full() {
        return Err(ScheduleError::EventFull);
    }

    Ok(())
}

/// Removes any attendee with the given email from the event.
///
/// Withdrawal is permissive: removing an email that is not registered is
/// a successful no-op, and no event-status precondition applies. Returns
/// whether the attendee list changed.
pub fn withdraw(event: &mut Event, email: &str) -> bool {
    let before = event.attendees.len();
    event.attendees.retain(|attendee| attendee.email != email);
    event.attendees.len() != before
}
