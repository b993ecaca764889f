//! The campus store — runtime coordinator for the event engine.
//!
//! [`CampusStore`] owns the write path: every mutating operation acquires
//! the single writer lock, re-reads the current collections from the
//! storage collaborator, decides through the pure rules, persists, and
//! broadcasts a [`DataChange`] notice. Serializing writers eliminates
//! lost updates between concurrent callers in this process; writers in
//! other processes sharing the same storage remain uncoordinated, and
//! subscribers are expected to refetch on every notice.
//!
//! Reads take no lock and operate on a point-in-time snapshot.

use std::sync::Arc;

use campus_events_core::conflict::{SlotCandidate, conflicts};
use campus_events_core::environment::Clock;
use campus_events_core::state_store::{Collection, StateStore};
use campus_events_core::workflow::{self, ReviewDecision};
use campus_events_core::{
    Attendee, DataChange, Event, EventDraft, EventId, EventStatus, EventWithVenue, Role,
    ScheduleError, Venue, VenueId, registration,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, broadcast};

use crate::codec;

/// Capacity of the change broadcast channel.
///
/// Lagging subscribers miss notices and should refetch on the next one;
/// sixteen buffered notices is plenty for view refresh traffic.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Configuration for [`CampusStore`].
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::new().with_broadcast_capacity(256);
/// let store = CampusStore::with_config(storage, clock, config);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    broadcast_capacity: usize,
}

impl StoreConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            broadcast_capacity: CHANGE_CHANNEL_CAPACITY,
        }
    }

    /// Sets the change broadcast channel capacity.
    ///
    /// Increase when many slow subscribers would otherwise lag.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime coordinator for venues, events, and registrations.
///
/// # Concurrency
///
/// All mutations are serialized through an internal writer lock and
/// re-read storage before deciding, so capacity and conflict checks
/// always run against the freshest state this process can observe.
/// Independent processes sharing the same storage are not coordinated;
/// that race is inherited from the storage layout and documented at the
/// collaborator seam.
pub struct CampusStore {
    storage: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    writer: Mutex<()>,
    changes: broadcast::Sender<DataChange>,
}

impl CampusStore {
    /// Creates a store over the given storage and clock collaborators.
    #[must_use]
    pub fn new(storage: Arc<dyn StateStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(storage, clock, StoreConfig::new())
    }

    /// Creates a store with custom configuration.
    #[must_use]
    pub fn with_config(
        storage: Arc<dyn StateStore>,
        clock: Arc<dyn Clock>,
        config: StoreConfig,
    ) -> Self {
        let (changes, _) = broadcast::channel(config.broadcast_capacity);
        Self {
            storage,
            clock,
            writer: Mutex::new(()),
            changes,
        }
    }

    /// Subscribes to change notices published after each successful
    /// mutation.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DataChange> {
        self.changes.subscribe()
    }

    // ========================================================================
    // Venue registry
    // ========================================================================

    /// Lists all venues.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn venues(&self) -> Result<Vec<Venue>, ScheduleError> {
        self.load(Collection::Venues).await
    }

    /// Adds a venue with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Validation`] when the name is empty, or
    /// [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn add_venue(&self, name: &str) -> Result<Venue, ScheduleError> {
        if name.trim().is_empty() {
            return Err(ScheduleError::Validation(
                "Venue name cannot be empty.".to_string(),
            ));
        }

        let _writer = self.writer.lock().await;
        let mut venues: Vec<Venue> = self.load(Collection::Venues).await?;
        let venue = Venue::new(VenueId::generate(), name.to_string());
        venues.push(venue.clone());
        self.persist(Collection::Venues, &venues, DataChange::Venues)
            .await?;

        tracing::info!(venue_id = %venue.id, name = %venue.name, "venue added");
        metrics::counter!("store.venues.added").increment(1);
        Ok(venue)
    }

    /// Renames an existing venue.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::VenueNotFound`] when the id is unknown,
    /// [`ScheduleError::Validation`] when the name is empty, or
    /// [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn rename_venue(&self, id: &VenueId, name: &str) -> Result<Venue, ScheduleError> {
        if name.trim().is_empty() {
            return Err(ScheduleError::Validation(
                "Venue name cannot be empty.".to_string(),
            ));
        }

        let _writer = self.writer.lock().await;
        let mut venues: Vec<Venue> = self.load(Collection::Venues).await?;
        let Some(venue) = venues.iter_mut().find(|venue| &venue.id == id) else {
            return Err(ScheduleError::VenueNotFound(id.clone()));
        };
        venue.name = name.to_string();
        let renamed = venue.clone();
        self.persist(Collection::Venues, &venues, DataChange::Venues)
            .await?;

        tracing::info!(venue_id = %renamed.id, name = %renamed.name, "venue renamed");
        metrics::counter!("store.venues.renamed").increment(1);
        Ok(renamed)
    }

    /// Removes a venue.
    ///
    /// Removal is idempotent and does not cascade: events referencing the
    /// venue keep their dangling reference and resolve to the placeholder
    /// in enriched listings.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn remove_venue(&self, id: &VenueId) -> Result<(), ScheduleError> {
        let _writer = self.writer.lock().await;
        let mut venues: Vec<Venue> = self.load(Collection::Venues).await?;
        venues.retain(|venue| &venue.id != id);
        self.persist(Collection::Venues, &venues, DataChange::Venues)
            .await?;

        tracing::info!(venue_id = %id, "venue removed");
        metrics::counter!("store.venues.removed").increment(1);
        Ok(())
    }

    // ========================================================================
    // Event repository
    // ========================================================================

    /// Lists all events, whatever their status.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn events(&self) -> Result<Vec<Event>, ScheduleError> {
        self.load(Collection::Events).await
    }

    /// Looks up a single event by id.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn event(&self, id: &EventId) -> Result<Option<Event>, ScheduleError> {
        let events: Vec<Event> = self.load(Collection::Events).await?;
        Ok(events.into_iter().find(|event| &event.id == id))
    }

    /// Lists all events joined to their venues.
    ///
    /// The join never fails: a dangling venue reference resolves to the
    /// "Unknown Venue" placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn events_with_venues(&self) -> Result<Vec<EventWithVenue>, ScheduleError> {
        let events: Vec<Event> = self.load(Collection::Events).await?;
        let venues: Vec<Venue> = self.load(Collection::Venues).await?;

        Ok(events
            .into_iter()
            .map(|event| {
                let venue = venues
                    .iter()
                    .find(|venue| venue.id == event.venue_id)
                    .cloned()
                    .unwrap_or_else(|| Venue::unknown(event.venue_id.clone()));
                EventWithVenue { event, venue }
            })
            .collect())
    }

    /// Creates an event from a validated draft.
    ///
    /// The initial status follows the approval workflow: administrators'
    /// events start Approved, everyone else's start Pending. The slot is
    /// checked against every non-rejected event at the same venue and
    /// date before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Validation`] for a malformed draft,
    /// [`ScheduleError::SlotConflict`] when the slot is taken, or
    /// [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn create_event(
        &self,
        draft: EventDraft,
        creator: Role,
    ) -> Result<Event, ScheduleError> {
        draft.validate()?;

        let _writer = self.writer.lock().await;
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        self.ensure_slot_free(&draft, &events, None).await?;

        let event = Event {
            id: EventId::generate(),
            title: draft.title,
            description: draft.description,
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            venue_id: draft.venue_id,
            max_attendees: draft.max_attendees,
            poster: draft.poster,
            organizer_email: draft.organizer_email,
            status: workflow::initial_status(creator),
            attendees: Vec::new(),
            coordinators: draft.coordinators,
            department: draft.department,
        };
        events.push(event.clone());
        self.persist(Collection::Events, &events, DataChange::Events)
            .await?;

        tracing::info!(event_id = %event.id, status = ?event.status, "event created");
        metrics::counter!("store.events.created").increment(1);
        Ok(event)
    }

    /// Replaces an event's editable fields with a new draft.
    ///
    /// Status and attendee list are preserved; the slot check excludes the
    /// event itself so an unchanged slot still passes.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EventNotFound`] when the id is unknown,
    /// [`ScheduleError::Validation`] for a malformed draft,
    /// [`ScheduleError::SlotConflict`] when the new slot is taken, or
    /// [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn update_event(
        &self,
        id: &EventId,
        draft: EventDraft,
    ) -> Result<Event, ScheduleError> {
        draft.validate()?;

        let _writer = self.writer.lock().await;
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        let Some(index) = events.iter().position(|event| &event.id == id) else {
            return Err(ScheduleError::EventNotFound(id.clone()));
        };
        self.ensure_slot_free(&draft, &events, Some(id)).await?;

        let event = &mut events[index];
        event.title = draft.title;
        event.description = draft.description;
        event.date = draft.date;
        event.start_time = draft.start_time;
        event.end_time = draft.end_time;
        event.venue_id = draft.venue_id;
        event.max_attendees = draft.max_attendees;
        event.poster = draft.poster;
        event.organizer_email = draft.organizer_email;
        event.coordinators = draft.coordinators;
        event.department = draft.department;
        let updated = event.clone();
        self.persist(Collection::Events, &events, DataChange::Events)
            .await?;

        tracing::info!(event_id = %updated.id, "event updated");
        metrics::counter!("store.events.updated").increment(1);
        Ok(updated)
    }

    /// Deletes an event. Idempotent: deleting an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn delete_event(&self, id: &EventId) -> Result<(), ScheduleError> {
        let _writer = self.writer.lock().await;
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        events.retain(|event| &event.id != id);
        self.persist(Collection::Events, &events, DataChange::Events)
            .await?;

        tracing::info!(event_id = %id, "event deleted");
        metrics::counter!("store.events.deleted").increment(1);
        Ok(())
    }

    /// Applies a review decision to a pending event.
    ///
    /// Review is an administrator action; the caller passes the actor's
    /// role as resolved by the identity collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Validation`] when the actor is not an
    /// administrator or the event is not Pending,
    /// [`ScheduleError::EventNotFound`] when the id is unknown, or
    /// [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn review_event(
        &self,
        id: &EventId,
        decision: ReviewDecision,
        actor: Role,
    ) -> Result<Event, ScheduleError> {
        if !actor.is_admin() {
            return Err(ScheduleError::Validation(
                "Only administrators can review events.".to_string(),
            ));
        }

        let _writer = self.writer.lock().await;
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        let Some(event) = events.iter_mut().find(|event| &event.id == id) else {
            return Err(ScheduleError::EventNotFound(id.clone()));
        };

        event.status = workflow::review(event.status, decision)?;
        let reviewed = event.clone();
        self.persist(Collection::Events, &events, DataChange::Events)
            .await?;

        tracing::info!(event_id = %reviewed.id, status = ?reviewed.status, "event reviewed");
        metrics::counter!("store.events.reviewed").increment(1);
        Ok(reviewed)
    }

    // ========================================================================
    // Query helpers
    // ========================================================================

    /// Lists events with the given status, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn events_by_status(
        &self,
        status: EventStatus,
    ) -> Result<Vec<Event>, ScheduleError> {
        let events: Vec<Event> = self.load(Collection::Events).await?;
        Ok(events
            .into_iter()
            .filter(|event| event.status == status)
            .collect())
    }

    /// Approved events on or after today, soonest first.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn approved_upcoming(&self) -> Result<Vec<Event>, ScheduleError> {
        let today = self.today();
        let mut events = self.events_by_status(EventStatus::Approved).await?;
        events.retain(|event| event.date >= today);
        events.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(events)
    }

    /// Approved events before today, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn approved_past(&self) -> Result<Vec<Event>, ScheduleError> {
        let today = self.today();
        let mut events = self.events_by_status(EventStatus::Approved).await?;
        events.retain(|event| event.date < today);
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }

    /// Events organized by the given email, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn events_by_organizer(&self, email: &str) -> Result<Vec<Event>, ScheduleError> {
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        events.retain(|event| event.organizer_email == email);
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }

    /// Events the given email is registered for, on or after today,
    /// soonest first.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn registered_upcoming(&self, email: &str) -> Result<Vec<Event>, ScheduleError> {
        let today = self.today();
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        events.retain(|event| event.has_attendee(email) && event.date >= today);
        events.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(events)
    }

    /// Events the given email is registered for, before today, most
    /// recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn registered_past(&self, email: &str) -> Result<Vec<Event>, ScheduleError> {
        let today = self.today();
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        events.retain(|event| event.has_attendee(email) && event.date < today);
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Registers an attendee for an event.
    ///
    /// Preconditions run in order against the freshest stored state: the
    /// event exists, is Approved, the email is not already registered,
    /// and capacity remains. On success the attendee is appended in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EventNotFound`],
    /// [`ScheduleError::NotApproved`], [`ScheduleError::AlreadyRegistered`],
    /// [`ScheduleError::EventFull`], or [`ScheduleError::Storage`].
    pub async fn register(
        &self,
        id: &EventId,
        attendee: Attendee,
    ) -> Result<Event, ScheduleError> {
        let _writer = self.writer.lock().await;
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        let Some(event) = events.iter_mut().find(|event| &event.id == id) else {
            metrics::counter!("store.registrations.rejected").increment(1);
            return Err(ScheduleError::EventNotFound(id.clone()));
        };

        if let Err(refusal) = registration::admit(event, &attendee) {
            tracing::warn!(event_id = %id, email = %attendee.email, %refusal, "registration refused");
            metrics::counter!("store.registrations.rejected").increment(1);
            return Err(refusal);
        }

        event.attendees.push(attendee);
        let registered = event.clone();
        self.persist(Collection::Events, &events, DataChange::Events)
            .await?;

        tracing::info!(event_id = %id, "registration accepted");
        metrics::counter!("store.registrations.accepted").increment(1);
        Ok(registered)
    }

    /// Withdraws an attendee from an event.
    ///
    /// Permissive by design: withdrawing an email that is not registered
    /// succeeds, and no status precondition applies, so attendees can
    /// always leave past or unapproved events. Only a missing event fails.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EventNotFound`] when the id is unknown, or
    /// [`ScheduleError::Storage`] when the storage collaborator fails.
    pub async fn unregister(&self, id: &EventId, email: &str) -> Result<(), ScheduleError> {
        let _writer = self.writer.lock().await;
        let mut events: Vec<Event> = self.load(Collection::Events).await?;
        let Some(event) = events.iter_mut().find(|event| &event.id == id) else {
            return Err(ScheduleError::EventNotFound(id.clone()));
        };

        let removed = registration::withdraw(event, email);
        self.persist(Collection::Events, &events, DataChange::Events)
            .await?;

        tracing::info!(event_id = %id, removed, "registration withdrawn");
        metrics::counter!("store.registrations.withdrawn").increment(1);
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    async fn load<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, ScheduleError> {
        match self.storage.load(collection).await? {
            Some(bytes) => Ok(codec::decode(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
        change: DataChange,
    ) -> Result<(), ScheduleError> {
        let bytes = codec::encode(items)?;
        self.storage.save(collection, bytes).await?;
        // Nobody listening is fine; subscribers refetch on the next notice.
        let _ = self.changes.send(change);
        Ok(())
    }

    async fn ensure_slot_free(
        &self,
        draft: &EventDraft,
        events: &[Event],
        exclude: Option<&EventId>,
    ) -> Result<(), ScheduleError> {
        let candidate = SlotCandidate {
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            venue_id: draft.venue_id.clone(),
        };

        if conflicts(&candidate, events, exclude) {
            let venues: Vec<Venue> = self.load(Collection::Venues).await?;
            let venue_name = venues
                .into_iter()
                .find(|venue| venue.id == draft.venue_id)
                .map_or_else(|| "this venue".to_string(), |venue| venue.name);
            tracing::warn!(venue = %venue_name, date = %draft.date, "slot conflict");
            metrics::counter!("store.events.conflicts").increment(1);
            return Err(ScheduleError::SlotConflict { venue_name });
        }

        Ok(())
    }
}
