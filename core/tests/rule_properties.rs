//! Property-based tests for the pure scheduling and registration rules.
//!
//! Run with: `cargo test --test rule_properties`

#![allow(clippy::unwrap_used)]

use campus_events_core::conflict::{SlotCandidate, conflicts};
use campus_events_core::registration::{admit, withdraw};
use campus_events_core::types::{Attendee, Capacity, Event, EventId, EventStatus, VenueId};
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

fn time_of(minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn booked(id: &str, start: u32, end: u32, status: EventStatus, capacity: u32) -> Event {
    Event {
        id: EventId::new(id),
        title: "Booked".to_string(),
        description: "Existing booking".to_string(),
        date: day(),
        start_time: time_of(start),
        end_time: time_of(end),
        venue_id: VenueId::new("v1"),
        max_attendees: Capacity::new(capacity),
        poster: None,
        organizer_email: "organizer@campus.edu".to_string(),
        status,
        attendees: Vec::new(),
        coordinators: "Coordinator".to_string(),
        department: "CSE".to_string(),
    }
}

fn candidate(start: u32, end: u32) -> SlotCandidate {
    SlotCandidate {
        date: day(),
        start_time: time_of(start),
        end_time: time_of(end),
        venue_id: VenueId::new("v1"),
    }
}

fn attendee(index: u8) -> Attendee {
    Attendee {
        email: format!("user{index}@campus.edu"),
        name: format!("User {index}"),
        department: "CSE".to_string(),
        section: "A".to_string(),
        year: "2".to_string(),
    }
}

/// A strictly increasing minute window within one day.
fn window() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1439).prop_flat_map(|start| ((start + 1)..=1439).prop_map(move |end| (start, end)))
}

fn any_status() -> impl Strategy<Value = EventStatus> {
    prop_oneof![
        Just(EventStatus::Pending),
        Just(EventStatus::Approved),
        Just(EventStatus::Rejected),
    ]
}

proptest! {
    /// The predicate agrees with half-open interval arithmetic for every
    /// pair of valid windows.
    #[test]
    fn overlap_matches_interval_arithmetic(
        (s1, e1) in window(),
        (s2, e2) in window(),
    ) {
        let existing = vec![booked("e1", s2, e2, EventStatus::Approved, 10)];
        let expected = s1 < e2 && e1 > s2;
        prop_assert_eq!(conflicts(&candidate(s1, e1), &existing, None), expected);
    }

    /// Conflict is symmetric: if A collides with B, B collides with A.
    #[test]
    fn overlap_is_symmetric((s1, e1) in window(), (s2, e2) in window()) {
        let a = booked("a", s1, e1, EventStatus::Approved, 10);
        let b = booked("b", s2, e2, EventStatus::Approved, 10);
        prop_assert_eq!(
            conflicts(&candidate(s1, e1), &[b], None),
            conflicts(&candidate(s2, e2), &[a], None)
        );
    }

    /// Back-to-back windows sharing a boundary never collide.
    #[test]
    fn touching_windows_never_conflict(
        (start, boundary, end) in (1u32..1439).prop_flat_map(|b| (0..b, Just(b), (b + 1)..=1439)),
    ) {
        let earlier = booked("e1", start, boundary, EventStatus::Approved, 10);
        prop_assert!(!conflicts(&candidate(boundary, end), &[earlier], None));
    }

    /// Rejected events never occupy their venue, whatever the windows.
    #[test]
    fn rejected_events_never_conflict((s1, e1) in window(), (s2, e2) in window()) {
        let existing = vec![booked("e1", s2, e2, EventStatus::Rejected, 10)];
        prop_assert!(!conflicts(&candidate(s1, e1), &existing, None));
    }

    /// Admission never exceeds capacity and never duplicates an email,
    /// whatever order registrations arrive in.
    #[test]
    fn admission_preserves_capacity_and_uniqueness(
        capacity in 1u32..6,
        arrivals in prop::collection::vec(0u8..10, 0..30),
    ) {
        let mut event = booked("e1", 600, 720, EventStatus::Approved, capacity);

        for index in arrivals {
            let applicant = attendee(index);
            if admit(&event, &applicant).is_ok() {
                event.attendees.push(applicant);
            }
        }

        prop_assert!(event.attendees.len() <= capacity as usize);
        let mut emails: Vec<_> = event.attendees.iter().map(|a| a.email.clone()).collect();
        emails.sort();
        emails.dedup();
        prop_assert_eq!(emails.len(), event.attendees.len());
    }

    /// Registration only ever succeeds against an Approved event.
    #[test]
    fn admission_requires_approval(status in any_status(), index in 0u8..10) {
        let event = booked("e1", 600, 720, status, 10);
        let admitted = admit(&event, &attendee(index)).is_ok();
        prop_assert_eq!(admitted, status == EventStatus::Approved);
    }

    /// Withdrawing twice leaves the same attendee list as withdrawing once.
    #[test]
    fn withdraw_is_idempotent(
        registered in prop::collection::vec(0u8..10, 0..10),
        target in 0u8..10,
    ) {
        let mut event = booked("e1", 600, 720, EventStatus::Approved, 100);
        for index in registered {
            let applicant = attendee(index);
            if !event.has_attendee(&applicant.email) {
                event.attendees.push(applicant);
            }
        }

        let email = attendee(target).email;
        withdraw(&mut event, &email);
        let after_once = event.attendees.clone();
        withdraw(&mut event, &email);
        prop_assert_eq!(event.attendees, after_once);
    }
}
