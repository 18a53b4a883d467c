//! Gurl Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::SystemClock;
pub use persistence::{
    HistoryError, HistoryRepository, SettingsError, SettingsRepository, SnapshotHistoryStore,
    config_dir,
};
pub use serialization::SerializationError;
