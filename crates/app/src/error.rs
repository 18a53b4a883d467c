//! Errors that end the program.

use gurl_infrastructure::SettingsError;
use thiserror::Error;

/// Startup and terminal errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// No path was configured and the platform has no config directory.
    #[error("no config directory available; set {0}")]
    NoConfigDir(&'static str),

    /// The log file could not be opened.
    #[error("cannot open log file: {0}")]
    LogFile(#[source] std::io::Error),

    /// The settings file is unreadable or invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result alias for the binary.
pub type AppResult<T> = Result<T, AppError>;
