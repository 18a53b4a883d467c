//! Wall-clock source for relative history timestamps.

use chrono::{DateTime, Utc};
use gurl_application::ports::Clock;

/// Reads "now" from the operating system on every call, so labels such as
/// "5m ago" stay current across redraws.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Returns the clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
