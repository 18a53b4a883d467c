//! Tracing subscriber setup.
//!
//! The terminal is owned by the UI, so events go to a file or nowhere.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber for `config`.
///
/// An invalid filter falls back to `info`. A second call is a no-op.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending.
pub fn init(config: &AppConfig) -> AppResult<()> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(AppError::LogFile)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}
