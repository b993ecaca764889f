//! Time-conflict resolution for venue bookings.
//!
//! A pure predicate deciding whether a candidate time slot collides with
//! any existing booking at the same venue and date. Two half-open
//! intervals `[s1, e1)` and `[s2, e2)` conflict iff `s1 < e2 && e1 > s2`:
//! an event ending exactly when another starts does not conflict.
//!
//! Rejected events never occupy their venue and are exempt. A candidate
//! whose window is not strictly increasing is reported as conflicting,
//! which forces callers to block submission of self-contradictory input.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::types::{Event, EventId, EventStatus, VenueId};

/// A proposed booking to test against existing events.
#[derive(Clone, Debug)]
pub struct SlotCandidate {
    /// Calendar day of the proposed booking
    pub date: NaiveDate,
    /// Proposed start time
    pub start_time: NaiveTime,
    /// Proposed end time
    pub end_time: NaiveTime,
    /// Venue the booking would occupy
    pub venue_id: VenueId,
}

/// Converts a time of day to minutes since midnight.
#[must_use]
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Checks whether the candidate slot collides with any existing
/// non-rejected event at the same venue and date.
///
/// `exclude` skips one event id, used when editing an event so it does
/// not conflict with itself. All of `existing` is considered; the first
/// hit short-circuits.
#[must_use]
pub fn conflicts(candidate: &SlotCandidate, existing: &[Event], exclude: Option<&EventId>) -> bool {
    let start = minutes_since_midnight(candidate.start_time);
    let end = minutes_since_midnight(candidate.end_time);

    // An inverted or empty window can never be booked.
    if start >= end {
        return true;
    }

    existing
        .iter()
        .filter(|event| exclude != Some(&event.id))
        .filter(|event| event.status != EventStatus::Rejected)
        .filter(|event| event.date == candidate.date && event.venue_id == candidate.venue_id)
        .any(|event| {
            let existing_start = minutes_since_midnight(event.start_time);
            let existing_end = minutes_since_midnight(event.end_time);
            start < existing_end && end > existing_start
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Capacity, Event, EventId, VenueId};

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn booked(id: &str, start: NaiveTime, end: NaiveTime, status: EventStatus) -> Event {
        Event {
            id: EventId::new(id),
            title: "Existing".to_string(),
            description: "Existing booking".to_string(),
            date: date(),
            start_time: start,
            end_time: end,
            venue_id: VenueId::new("v1"),
            max_attendees: Capacity::new(100),
            poster: None,
            organizer_email: "organizer@campus.edu".to_string(),
            status,
            attendees: Vec::new(),
            coordinators: "Coordinator".to_string(),
            department: "CSE".to_string(),
        }
    }

    fn candidate(start: NaiveTime, end: NaiveTime) -> SlotCandidate {
        SlotCandidate {
            date: date(),
            start_time: start,
            end_time: end,
            venue_id: VenueId::new("v1"),
        }
    }

    #[test]
    fn overlapping_windows_conflict() {
        let existing = vec![booked("e1", time(10, 0), time(12, 0), EventStatus::Approved)];
        assert!(conflicts(
            &candidate(time(11, 0), time(13, 0)),
            &existing,
            None
        ));
    }

    #[test]
    fn touching_endpoints_do_not_conflict() {
        let existing = vec![booked("e1", time(9, 0), time(10, 0), EventStatus::Approved)];
        assert!(!conflicts(
            &candidate(time(10, 0), time(11, 0)),
            &existing,
            None
        ));
    }

    #[test]
    fn one_minute_past_the_boundary_conflicts() {
        let existing = vec![booked("e1", time(9, 0), time(10, 1), EventStatus::Approved)];
        assert!(conflicts(
            &candidate(time(10, 0), time(11, 0)),
            &existing,
            None
        ));
    }

    #[test]
    fn contained_window_conflicts() {
        let existing = vec![booked("e1", time(9, 0), time(17, 0), EventStatus::Approved)];
        assert!(conflicts(
            &candidate(time(12, 0), time(13, 0)),
            &existing,
            None
        ));
    }

    #[test]
    fn rejected_events_are_exempt() {
        let existing = vec![booked("e1", time(10, 0), time(12, 0), EventStatus::Rejected)];
        assert!(!conflicts(
            &candidate(time(10, 0), time(12, 0)),
            &existing,
            None
        ));
    }

    #[test]
    fn pending_events_still_occupy_the_venue() {
        let existing = vec![booked("e1", time(10, 0), time(12, 0), EventStatus::Pending)];
        assert!(conflicts(
            &candidate(time(11, 0), time(13, 0)),
            &existing,
            None
        ));
    }

    #[test]
    fn other_dates_and_venues_do_not_conflict() {
        let mut other_day = booked("e1", time(10, 0), time(12, 0), EventStatus::Approved);
        other_day.date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let mut other_venue = booked("e2", time(10, 0), time(12, 0), EventStatus::Approved);
        other_venue.venue_id = VenueId::new("v2");

        assert!(!conflicts(
            &candidate(time(10, 0), time(12, 0)),
            &[other_day, other_venue],
            None
        ));
    }

    #[test]
    fn editing_excludes_the_event_itself() {
        let existing = vec![booked("e1", time(10, 0), time(12, 0), EventStatus::Approved)];
        let id = EventId::new("e1");
        assert!(!conflicts(
            &candidate(time(10, 0), time(12, 0)),
            &existing,
            Some(&id)
        ));
    }

    #[test]
    fn inverted_candidate_always_conflicts() {
        assert!(conflicts(&candidate(time(12, 0), time(10, 0)), &[], None));
        assert!(conflicts(&candidate(time(12, 0), time(12, 0)), &[], None));
    }
}
