//! User Settings Domain Model
//!
//! Defines user preferences for the gurl terminal client.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// User settings for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Maximum number of history entries to keep.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Input mode the command bar starts in.
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

fn default_history_limit() -> usize {
    100
}

fn default_mode() -> String {
    "filter".to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            default_mode: default_mode(),
        }
    }
}

impl UserSettings {
    /// Checks values that deserialization alone cannot reject.
    pub const fn validate(&self) -> DomainResult<()> {
        if self.history_limit == 0 {
            return Err(DomainError::InvalidHistoryLimit);
        }
        Ok(())
    }
}
