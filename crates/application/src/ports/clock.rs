//! Clock port for time-related operations

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Relative timestamps in the history list are computed against this clock,
/// so tests can pin "now".
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
