//! # Campus Events Testing
//!
//! Testing utilities for the campus event engine:
//!
//! - Mock collaborators ([`MemoryStore`], [`FixedClock`], [`FailingStore`])
//! - Seed fixtures mirroring the application's bootstrap data
//! - A [`StoreTest`] builder wiring a store over seeded in-memory state
//!
//! ## Example
//!
//! ```ignore
//! use campus_events_testing::{fixtures, StoreTest};
//!
//! #[tokio::test]
//! async fn lists_seeded_venues() {
//!     let store = StoreTest::new().with_seed_data().build();
//!     assert_eq!(store.venues().await.unwrap().len(), 4);
//! }
//! ```

pub mod fixtures;
pub mod mocks;

pub use mocks::{FailingStore, FixedClock, MemoryStore, test_clock};
pub use store_test::StoreTest;

/// Initializes a fmt tracing subscriber for test output.
///
/// Safe to call from every test; repeated initialization is ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
