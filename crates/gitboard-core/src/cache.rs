use std::sync::{Arc, RwLock};

use crate::model::Snapshot;

/// Holds the most recently published [`Snapshot`].
///
/// Publication swaps the whole `Arc`, so readers either see the previous
/// snapshot or the new one, never a mix of the two.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, or `None` before the first cycle completes.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the current snapshot. Only the scheduler's refresh step calls this.
    pub(crate) fn publish(&self, snapshot: Snapshot) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(Arc::new(snapshot));
    }
}
