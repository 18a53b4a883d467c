//! Request History Domain Model
//!
//! Defines the structure for tracking executed requests.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::method::HttpMethod;

/// A single executed request, immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Monotonically assigned identifier.
    pub id: u64,
    /// HTTP method used.
    pub method: HttpMethod,
    /// The request URL.
    pub url: String,
    /// Response status code, `0` if the request never completed.
    #[serde(default)]
    pub status: u16,
    /// When the request was executed.
    pub date: DateTime<Utc>,
    /// Free-text label.
    #[serde(default)]
    pub annotation: String,
}

impl HistoryRecord {
    /// Returns true if the request produced a response.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status != 0
    }

    /// Returns the `"METHOD url"` summary used as the list key.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

/// Returns a human-readable "time ago" string for `date` as seen at `now`.
#[must_use]
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(date);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Request history with a maximum size limit.
///
/// Entries are kept newest first; that ordering is the contract every
/// reader of the history relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHistory {
    /// History entries (newest first).
    entries: VecDeque<HistoryRecord>,
    /// Maximum number of entries to keep.
    #[serde(default = "default_max_entries")]
    max_entries: usize,
    /// Highest id ever handed out, so trimmed ids are never reused.
    #[serde(default)]
    last_id: u64,
}

const fn default_max_entries() -> usize {
    100
}

impl Default for RequestHistory {
    fn default() -> Self {
        Self::new(default_max_entries())
    }
}

impl RequestHistory {
    /// Creates a new empty history. A limit of zero is raised to one.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
            last_id: 0,
        }
    }

    /// Records a new request at the front and returns the stored record.
    pub fn record(
        &mut self,
        method: HttpMethod,
        url: impl Into<String>,
        status: u16,
        date: DateTime<Utc>,
        annotation: impl Into<String>,
    ) -> &HistoryRecord {
        let id = self.next_id();
        self.last_id = id;
        self.entries.push_front(HistoryRecord {
            id,
            method,
            url: url.into(),
            status,
            date,
            annotation: annotation.into(),
        });
        self.trim();
        &self.entries[0]
    }

    fn next_id(&self) -> u64 {
        self.entries
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            .max(self.last_id)
            + 1
    }

    fn trim(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
    }

    /// Returns an owned copy of all entries (newest first).
    #[must_use]
    pub fn to_vec(&self) -> Vec<HistoryRecord> {
        self.entries.iter().cloned().collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the maximum number of entries and trims if needed.
    pub fn set_max_entries(&mut self, max: usize) -> DomainResult<()> {
        if max == 0 {
            return Err(DomainError::InvalidHistoryLimit);
        }
        self.max_entries = max;
        self.trim();
        Ok(())
    }
}
