//! Persistence implementations for file-based storage.
//!
//! Files live in the platform-specific config directory unless the caller
//! passes explicit paths:
//! - Linux: ~/.config/gurl/
//! - macOS: ~/Library/Application Support/gurl/
//! - Windows: %APPDATA%/gurl/

use std::path::PathBuf;

mod history_repository;
mod history_store;
mod settings_repository;

pub use history_repository::{HistoryError, HistoryRepository};
pub use history_store::SnapshotHistoryStore;
pub use settings_repository::{SettingsError, SettingsRepository};

/// Returns the gurl config directory, if the platform has one.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("gurl"))
}
