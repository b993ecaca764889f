//! # Campus Events Runtime
//!
//! The imperative shell of the campus event engine.
//!
//! This crate provides [`CampusStore`], the coordinator that drives the
//! pure rules from `campus-events-core` against an injected storage
//! collaborator:
//!
//! 1. Serialize every mutation through a single writer
//! 2. Re-read current collections before deciding
//! 3. Decide via the pure rules (conflicts, workflow, admission)
//! 4. Persist, then broadcast a change notice to subscribers
//!
//! ## Example
//!
//! ```ignore
//! use campus_events_runtime::CampusStore;
//!
//! let store = CampusStore::new(storage, clock);
//! let mut changes = store.subscribe();
//!
//! let event = store.create_event(draft, Role::User).await?;
//! store.register(&event.id, attendee).await?;
//! ```

pub mod codec;
pub mod store;

pub use store::{CampusStore, StoreConfig};
