//! Read side of the persisted request history.

use std::sync::Arc;

use gurl_domain::{HistoryRecord, RequestHistory};

/// Synchronous access to the current history snapshot.
///
/// `history` returns records newest first. Readers must not re-sort them:
/// the order is part of this contract, not something the caller derives.
/// Implementations backed by slow storage load asynchronously elsewhere and
/// install the result through `replace`.
pub trait HistoryStore: Send + Sync {
    /// Returns every stored record, newest first.
    fn history(&self) -> Vec<HistoryRecord>;

    /// Installs a freshly loaded history as the current snapshot.
    fn replace(&self, history: RequestHistory);
}

impl<T: HistoryStore + ?Sized> HistoryStore for Arc<T> {
    fn history(&self) -> Vec<HistoryRecord> {
        (**self).history()
    }

    fn replace(&self, history: RequestHistory) {
        (**self).replace(history);
    }
}

impl<T: HistoryStore + ?Sized> HistoryStore for &T {
    fn history(&self) -> Vec<HistoryRecord> {
        (**self).history()
    }

    fn replace(&self, history: RequestHistory) {
        (**self).replace(history);
    }
}
