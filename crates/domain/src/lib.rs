//! Gurl Domain - Core business types
//!
//! This crate defines the domain model for the gurl terminal client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod history;
pub mod method;
pub mod settings;
pub mod status;

pub use error::{DomainError, DomainResult};
pub use history::{HistoryRecord, RequestHistory, relative_time};
pub use method::HttpMethod;
pub use settings::UserSettings;
pub use status::{Status, StatusClass};
