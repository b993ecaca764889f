//! Change notifications.
//!
//! Every successful mutation is announced on a broadcast channel owned by
//! the runtime store so dependent readers can refetch. The notice names
//! the collection that changed and nothing more: propagation is eventual
//! and non-transactional, and subscribers re-read rather than patch.

/// Notice that a persisted collection changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataChange {
    /// The venue registry changed
    Venues,
    /// The event records changed
    Events,
}
