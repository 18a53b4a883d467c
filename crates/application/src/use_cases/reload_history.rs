//! Reload history use case.

use tracing::debug;

use crate::ApplicationResult;
use crate::ports::{HistoryStorage, HistoryStore};

/// Result of a history reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadHistoryOutput {
    /// Number of records in the installed snapshot.
    pub records: usize,
}

/// Use case for re-reading persisted history into the in-memory snapshot.
///
/// The storage read is asynchronous; once it completes, the snapshot is
/// swapped in one step so synchronous readers never see a partial load.
pub struct ReloadHistory<S: HistoryStorage, H: HistoryStore> {
    storage: S,
    store: H,
}

impl<S: HistoryStorage, H: HistoryStore> ReloadHistory<S, H> {
    /// Creates a new `ReloadHistory` use case.
    #[must_use]
    pub const fn new(storage: S, store: H) -> Self {
        Self { storage, store }
    }

    /// Loads the history, applies `history_limit`, and installs it.
    ///
    /// # Errors
    /// - Returns error if the storage read fails
    /// - Returns error if `history_limit` is zero
    pub async fn execute(&self, history_limit: usize) -> ApplicationResult<ReloadHistoryOutput> {
        let mut history = self.storage.load().await?;
        history.set_max_entries(history_limit)?;

        let records = history.len();
        self.store.replace(history);
        debug!(records, "history snapshot replaced");

        Ok(ReloadHistoryOutput { records })
    }
}
