//! The process-wide active snapshot reference.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::corpus::snapshot::CorpusSnapshot;

/// Holds the active corpus snapshot.
///
/// Readers take an `Arc` once per request and keep using it even if a
/// retrain swaps in a new snapshot meanwhile. Writers only ever replace the
/// whole reference.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<CorpusSnapshot>>>,
}

impl SnapshotStore {
    /// Create a store with no snapshot loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given snapshot.
    pub fn with_snapshot(snapshot: CorpusSnapshot) -> Self {
        SnapshotStore {
            current: RwLock::new(Some(Arc::new(snapshot))),
        }
    }

    /// The active snapshot, if any.
    pub fn current(&self) -> Option<Arc<CorpusSnapshot>> {
        self.current.read().clone()
    }

    /// Install a new snapshot and return the previous one.
    pub fn replace(&self, snapshot: CorpusSnapshot) -> Option<Arc<CorpusSnapshot>> {
        let mut guard = self.current.write();
        std::mem::replace(&mut *guard, Some(Arc::new(snapshot)))
    }

    /// Drop the active snapshot and return it.
    pub fn clear(&self) -> Option<Arc<CorpusSnapshot>> {
        self.current.write().take()
    }

    /// Whether a snapshot is loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }
}
