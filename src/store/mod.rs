//! The in-memory event snapshot and its atomically-swappable holder.
//!
//! Loaded collections are immutable for the lifetime between reloads.
//! A query takes one `Arc` clone up front and evaluates entirely
//! against it; `replace` swaps the whole snapshot behind the lock, so
//! an in-flight query sees either the old snapshot set or the new one,
//! never a half-swapped mix.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// The full set of event collections available to the pipeline at a
/// point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Jersey City library events.
    pub jersey_city: Vec<Event>,
    /// Hoboken library events.
    pub hoboken: Vec<Event>,
    /// Cross-venue bookstore events; self-tagged with a city.
    pub bookstore: Vec<Event>,
}

impl Snapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-source record counts.
    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            jersey_city: self.jersey_city.len(),
            hoboken: self.hoboken.len(),
            bookstore: self.bookstore.len(),
        }
    }

    /// Total records across all sources.
    pub fn total(&self) -> usize {
        self.jersey_city.len() + self.hoboken.len() + self.bookstore.len()
    }
}

/// Per-source record counts, echoed to the reload collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCounts {
    pub jersey_city: usize,
    pub hoboken: usize,
    pub bookstore: usize,
}

/// Holder for the current snapshot.
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    /// Create a store holding an empty snapshot.
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::new())
    }

    /// Create a store holding the given snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The current snapshot. Callers hold the returned `Arc` for the
    /// lifetime of their query.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Replace the snapshot wholesale, returning the new per-source
    /// counts. The lock is held only for the pointer swap.
    pub fn replace(&self, snapshot: Snapshot) -> SnapshotCounts {
        let counts = snapshot.counts();
        *self.current.write() = Arc::new(snapshot);
        tracing::info!(
            jersey_city = counts.jersey_city,
            hoboken = counts.hoboken,
            bookstore = counts.bookstore,
            "snapshot replaced"
        );
        counts
    }
}
