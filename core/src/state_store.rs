//! Storage collaborator seam.
//!
//! The engine persists two independent collections — venues and events —
//! through this trait. The contract is deliberately minimal: whole
//! collections are loaded and saved as opaque bytes; an absent collection
//! is not an error (new stores start empty and the engine must function
//! correctly against them). Querying, indexing, and notification are the
//! engine's job, not the store's.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`; the runtime shares one store
//! behind an `Arc` across its operations.
//!
//! # Dyn Compatibility
//!
//! Methods return explicit `Pin<Box<dyn Future>>` instead of `async fn`
//! so the trait can be used as an object (`Arc<dyn StateStore>`).

use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

/// The persisted collections, each externally keyed by a well-known name.
///
/// The original layout also carries a user-credential collection; that
/// belongs to the identity collaborator and is not touched by this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The venue registry
    Venues,
    /// The event records, including embedded attendees
    Events,
}

impl Collection {
    /// Returns the well-known storage key for this collection.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Venues => "campus_venues",
            Self::Events => "campus_events",
        }
    }
}

/// Abstract key-value storage for the engine's collections.
pub trait StateStore: Send + Sync {
    /// Loads a collection's raw bytes.
    ///
    /// Returns `None` when the collection has never been saved; callers
    /// treat that as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the underlying storage fails; this is
    /// an environmental failure, not a domain outcome.
    fn load(
        &self,
        collection: Collection,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + '_>>;

    /// Saves a collection's raw bytes, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the underlying storage fails.
    fn save(
        &self,
        collection: Collection,
        bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + '_>>;
}
