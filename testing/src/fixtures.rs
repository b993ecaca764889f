//! Seed fixtures mirroring the application's bootstrap data.
//!
//! Four venues and four events: an approved festival next week, an
//! approved sports day tomorrow, a pending guest lecture tomorrow, and an
//! approved alumni meet three days in the past. Dates are derived from a
//! caller-supplied "today" so tests stay deterministic under a fixed
//! clock.

use campus_events_core::{
    Attendee, Capacity, Event, EventDraft, EventId, EventStatus, Venue, VenueId,
};
use chrono::{Duration, NaiveDate, NaiveTime};

/// Builds a time of day from hardcoded hours and minutes.
///
/// # Panics
///
/// Panics when the hardcoded values are out of range, which never
/// happens for the fixtures in this module.
#[must_use]
#[allow(clippy::expect_used)]
pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("hardcoded time should always be valid")
}

/// The four bootstrap venues.
#[must_use]
pub fn seed_venues() -> Vec<Venue> {
    vec![
        Venue::new(VenueId::new("v1"), "Main Auditorium".to_string()),
        Venue::new(VenueId::new("v2"), "Seminar Hall 1".to_string()),
        Venue::new(VenueId::new("v3"), "Amphitheatre".to_string()),
        Venue::new(VenueId::new("v4"), "Sports Ground".to_string()),
    ]
}

/// The four bootstrap events, scheduled relative to `today`.
#[must_use]
pub fn seed_events(today: NaiveDate) -> Vec<Event> {
    vec![
        Event {
            id: EventId::new("e1"),
            title: "Tech Fest".to_string(),
            description: "The biggest annual tech festival. Coding competitions, robotics workshops, and expert talks.".to_string(),
            date: today + Duration::days(7),
            start_time: hm(10, 0),
            end_time: hm(17, 0),
            venue_id: VenueId::new("v1"),
            max_attendees: Capacity::new(200),
            poster: Some("https://picsum.photos/seed/techfest/800/400".to_string()),
            organizer_email: "organizer@campus.edu".to_string(),
            status: EventStatus::Approved,
            attendees: vec![attendee("user1@campus.edu")],
            coordinators: "John Doe, Jane Smith".to_string(),
            department: "CSE Department".to_string(),
        },
        Event {
            id: EventId::new("e2"),
            title: "Annual Sports Day".to_string(),
            description: "Compete in various sports and cheer for your friends.".to_string(),
            date: today + Duration::days(1),
            start_time: hm(9, 0),
            end_time: hm(16, 0),
            venue_id: VenueId::new("v4"),
            max_attendees: Capacity::new(500),
            poster: None,
            organizer_email: "sports@campus.edu".to_string(),
            status: EventStatus::Approved,
            attendees: Vec::new(),
            coordinators: "Coach Carter".to_string(),
            department: "Sports Club".to_string(),
        },
        Event {
            id: EventId::new("e3"),
            title: "Guest Lecture on AI".to_string(),
            description: "An insightful session on the future of Artificial Intelligence.".to_string(),
            date: today + Duration::days(1),
            start_time: hm(14, 0),
            end_time: hm(15, 30),
            venue_id: VenueId::new("v2"),
            max_attendees: Capacity::new(50),
            poster: None,
            organizer_email: "organizer@campus.edu".to_string(),
            status: EventStatus::Pending,
            attendees: Vec::new(),
            coordinators: "Dr. Alan Turing".to_string(),
            department: "AI Research Wing".to_string(),
        },
        Event {
            id: EventId::new("e4"),
            title: "Alumni Meet".to_string(),
            description: "Reconnect with old friends and network with fellow alumni.".to_string(),
            date: today - Duration::days(3),
            start_time: hm(18, 0),
            end_time: hm(20, 0),
            venue_id: VenueId::new("v3"),
            max_attendees: Capacity::new(150),
            poster: Some("https://picsum.photos/seed/alumni/800/400".to_string()),
            organizer_email: "alumni@campus.edu".to_string(),
            status: EventStatus::Approved,
            attendees: vec![attendee("user1@campus.edu"), attendee("user2@campus.edu")],
            coordinators: "Alumni Association".to_string(),
            department: "Alumni Cell".to_string(),
        },
    ]
}

/// A plausible attendee for the given email.
#[must_use]
pub fn attendee(email: &str) -> Attendee {
    Attendee {
        email: email.to_string(),
        name: "Test User".to_string(),
        department: "CSE".to_string(),
        section: "A".to_string(),
        year: "3".to_string(),
    }
}

/// A valid draft for a new event at the given venue, date, and window.
#[must_use]
pub fn draft(
    venue_id: VenueId,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> EventDraft {
    EventDraft {
        title: "Hackathon".to_string(),
        description: "An overnight build sprint.".to_string(),
        date,
        start_time,
        end_time,
        venue_id,
        max_attendees: Capacity::new(100),
        poster: None,
        organizer_email: "organizer@campus.edu".to_string(),
        coordinators: "Ada Lovelace".to_string(),
        department: "CSE Department".to_string(),
    }
}
