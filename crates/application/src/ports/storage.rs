//! Storage ports

use std::future::Future;

use gurl_domain::RequestHistory;

use crate::ApplicationResult;

/// Port for persisting and loading the request history.
pub trait HistoryStorage: Send + Sync {
    /// Loads the persisted history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history exists but cannot be read or parsed.
    fn load(&self) -> impl Future<Output = ApplicationResult<RequestHistory>> + Send;

    /// Saves the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be serialized or written.
    fn save(&self, history: &RequestHistory) -> impl Future<Output = ApplicationResult<()>> + Send;
}
