//! Request history persistence.

use std::path::PathBuf;

use gurl_application::{ApplicationError, ApplicationResult, HistoryStorage};
use gurl_domain::RequestHistory;
use tokio::fs;
use tracing::debug;

use super::config_dir;
use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

impl From<HistoryError> for ApplicationError {
    fn from(err: HistoryError) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Repository for request history persistence in a single JSON file.
#[derive(Debug, Clone)]
pub struct HistoryRepository {
    path: PathBuf,
}

impl HistoryRepository {
    /// Creates a repository backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default history file path, if available.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|p| p.join("history.json"))
    }

    /// Loads request history from disk.
    ///
    /// Returns an empty history if the file doesn't exist.
    pub async fn load_history(&self) -> Result<RequestHistory, HistoryError> {
        if fs::metadata(&self.path).await.is_err() {
            debug!(path = %self.path.display(), "no history file, starting empty");
            return Ok(RequestHistory::default());
        }

        let content = fs::read(&self.path).await?;
        let history: RequestHistory = from_json_bytes(&content)?;
        debug!(path = %self.path.display(), records = history.len(), "history loaded");
        Ok(history)
    }

    /// Saves request history to disk, creating parent directories.
    pub async fn save_history(&self, history: &RequestHistory) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(history)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), records = history.len(), "history saved");
        Ok(())
    }
}

impl HistoryStorage for HistoryRepository {
    async fn load(&self) -> ApplicationResult<RequestHistory> {
        Ok(self.load_history().await?)
    }

    async fn save(&self, history: &RequestHistory) -> ApplicationResult<()> {
        Ok(self.save_history(history).await?)
    }
}
