//! JSON codec for persisted collections.
//!
//! Collections cross the storage seam as opaque bytes; this module fixes
//! the encoding to JSON documents, mapping serializer failures into the
//! storage error kind.

use campus_events_core::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encodes a collection as JSON bytes.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] when encoding fails.
pub fn encode<T: Serialize>(items: &[T]) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(items).map_err(|error| StorageError::Serialization(error.to_string()))
}

/// Decodes a collection from JSON bytes.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] when the bytes are not a valid
/// encoding of the collection.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, StorageError> {
    serde_json::from_slice(bytes).map_err(|error| StorageError::Serialization(error.to_string()))
}
