//! Operation status shown in the status bar.
//!
//! The status moves through `Idle` → `Processing` → a result (`Code`) or
//! `Error`. Only `Processing` drives the spinner.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of the current operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "code", rename_all = "snake_case")]
pub enum Status {
    /// Nothing is running.
    #[default]
    Idle,

    /// An operation is in flight.
    Processing,

    /// The last operation failed before producing a result code.
    Error,

    /// The last operation finished with a numeric result code.
    Code(u16),
}

/// Visual category of a result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Codes below 400.
    Success,
    /// Codes of 400 and above.
    Failure,
}

impl StatusClass {
    /// Classifies a numeric result code.
    ///
    /// Redirects (3xx) share the success class with 2xx.
    #[must_use]
    pub const fn of(code: u16) -> Self {
        if code < 400 {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

impl Status {
    /// Returns true if an operation is in flight.
    #[must_use]
    pub const fn is_processing(self) -> bool {
        matches!(self, Self::Processing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Processing => f.write_str("Processing"),
            Self::Error => f.write_str("Error"),
            Self::Code(code) => write!(f, "{code}"),
        }
    }
}
