//! Runtime configuration from environment variables.

use std::path::PathBuf;

use gurl_infrastructure::{HistoryRepository, SettingsRepository};

use crate::error::{AppError, AppResult};

/// Path of the history file.
pub const HISTORY_FILE_VAR: &str = "GURL_HISTORY_FILE";
/// Path of the settings file.
pub const SETTINGS_FILE_VAR: &str = "GURL_SETTINGS_FILE";
/// Path of the log file. Logging is discarded when unset.
pub const LOG_FILE_VAR: &str = "GURL_LOG_FILE";
/// `EnvFilter` directives.
pub const LOG_FILTER_VAR: &str = "GURL_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// History JSON file.
    pub history_file: PathBuf,
    /// Settings JSON file.
    pub settings_file: PathBuf,
    /// Optional log file.
    pub log_file: Option<PathBuf>,
    /// Log filter directives.
    pub log_filter: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a file path is unset and there is no platform
    /// config directory to default to.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let history_file = match get(HISTORY_FILE_VAR) {
            Some(path) => PathBuf::from(path),
            None => HistoryRepository::default_path()
                .ok_or(AppError::NoConfigDir(HISTORY_FILE_VAR))?,
        };
        let settings_file = match get(SETTINGS_FILE_VAR) {
            Some(path) => PathBuf::from(path),
            None => SettingsRepository::default_path()
                .ok_or(AppError::NoConfigDir(SETTINGS_FILE_VAR))?,
        };

        Ok(Self {
            history_file,
            settings_file,
            log_file: get(LOG_FILE_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
