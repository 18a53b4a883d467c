//! User settings persistence.

use std::path::PathBuf;

use gurl_domain::{DomainError, UserSettings};
use tokio::fs;
use tracing::debug;

use super::config_dir;
use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The file parsed but holds an unusable value.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),
}

/// Repository for user settings stored as JSON.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a repository backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default settings file path, if available.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|p| p.join("settings.json"))
    }

    /// Loads settings, falling back to defaults when the file is missing.
    pub async fn load(&self) -> Result<UserSettings, SettingsError> {
        if fs::metadata(&self.path).await.is_err() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(UserSettings::default());
        }

        let content = fs::read(&self.path).await?;
        let settings: UserSettings = from_json_bytes(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings, writing the defaults out first when the file is
    /// missing so there is a file to edit.
    pub async fn load_or_create(&self) -> Result<UserSettings, SettingsError> {
        if fs::metadata(&self.path).await.is_ok() {
            return self.load().await;
        }
        let settings = UserSettings::default();
        self.save(&settings).await?;
        debug!(path = %self.path.display(), "default settings written");
        Ok(settings)
    }

    /// Saves settings, creating parent directories.
    pub async fn save(&self, settings: &UserSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, to_json_stable_bytes(settings)?).await?;
        Ok(())
    }
}
