//! In-memory history snapshot shared between the UI and background loads.

use gurl_application::HistoryStore;
use gurl_domain::{HistoryRecord, RequestHistory};
use parking_lot::RwLock;

/// Holds the most recently loaded history behind a read-write lock.
///
/// Reads are synchronous and cheap; loads from disk happen elsewhere and are
/// installed whole through [`HistoryStore::replace`].
#[derive(Debug, Default)]
pub struct SnapshotHistoryStore {
    history: RwLock<RequestHistory>,
}

impl SnapshotHistoryStore {
    /// Creates a store holding `history`.
    #[must_use]
    pub fn new(history: RequestHistory) -> Self {
        Self {
            history: RwLock::new(history),
        }
    }

    /// Returns the number of records in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.read().len()
    }

    /// Returns true if the current snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.read().is_empty()
    }
}

impl HistoryStore for SnapshotHistoryStore {
    fn history(&self) -> Vec<HistoryRecord> {
        self.history.read().to_vec()
    }

    fn replace(&self, history: RequestHistory) {
        *self.history.write() = history;
    }
}
