//! Mock implementations of the engine's collaborator traits.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, MutexGuard, PoisonError};

use campus_events_core::environment::Clock;
use campus_events_core::state_store::{Collection, StateStore};
use campus_events_core::StorageError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// In-memory storage for fast, deterministic tests.
///
/// Collections live in a mutex-guarded map; loads clone the stored bytes
/// so readers observe point-in-time snapshots, like the real storage
/// substrate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with already-materialized records.
    ///
    /// # Panics
    ///
    /// Panics when the items cannot be encoded, which cannot happen for
    /// the engine's own types.
    #[allow(clippy::expect_used)]
    pub fn seed<T: Serialize>(&self, collection: Collection, items: &[T]) {
        let bytes = serde_json::to_vec(items).expect("engine types always encode");
        self.guard().insert(collection, bytes);
    }

    /// Returns the raw stored bytes of a collection, if any.
    #[must_use]
    pub fn raw(&self, collection: Collection) -> Option<Vec<u8>> {
        self.guard().get(&collection).cloned()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<Collection, Vec<u8>>> {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateStore for MemoryStore {
    fn load(
        &self,
        collection: Collection,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + '_>> {
        let bytes = self.guard().get(&collection).cloned();
        Box::pin(async move { Ok(bytes) })
    }

    fn save(
        &self,
        collection: Collection,
        bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + '_>> {
        self.guard().insert(collection, bytes);
        Box::pin(async move { Ok(()) })
    }
}

/// Storage that fails every operation.
///
/// Used to exercise the environmental failure path: engine operations
/// must surface the storage error rather than panic or corrupt state.
#[derive(Debug, Default)]
pub struct FailingStore;

impl StateStore for FailingStore {
    fn load(
        &self,
        collection: Collection,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + '_>> {
        Box::pin(async move { Err(StorageError::Io(format!("load {} failed", collection.key()))) })
    }

    fn save(
        &self,
        collection: Collection,
        _bytes: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + '_>> {
        Box::pin(async move { Err(StorageError::Io(format!("save {} failed", collection.key()))) })
    }
}

/// Fixed clock for deterministic tests.
///
/// Always returns the same time, making tests reproducible.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}
