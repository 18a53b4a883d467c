//! UI Bridge Module
//!
//! Defines the communication protocol between the terminal event loop and
//! the view state. Every input, timer and background result reaches the
//! components as a [`Message`]; the only work they ask the loop to do in
//! return is a [`Command`].

use std::time::Duration;

use gurl_domain::Status;

/// Messages consumed by the history browser and the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// The history filter token changed.
    FilterChanged(String),

    /// The persisted history changed and must be re-fetched.
    HistoryInvalidated,

    /// Move the history selection down one item.
    SelectNext,

    /// Move the history selection up one item.
    SelectPrevious,

    /// The live command buffer changed.
    CommandBufferChanged(String),

    /// The current operation status changed.
    StatusChanged(Status),

    /// The auxiliary short message changed.
    ShortMessageChanged(String),

    /// The input mode label changed.
    ModeChanged(String),

    /// A scheduled spinner tick fired.
    SpinnerTick {
        /// Tag of the spinner loop that scheduled this tick.
        tag: u64,
    },
}

/// Asynchronous work a component asks the event loop to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver `Message::SpinnerTick { tag }` after `after` has elapsed.
    ScheduleSpinnerTick {
        /// Tag to echo back in the tick message.
        tag: u64,
        /// Delay before the tick is delivered.
        after: Duration,
    },
}

impl Command {
    /// Returns the message this command eventually delivers.
    #[must_use]
    pub const fn message(self) -> Message {
        match self {
            Self::ScheduleSpinnerTick { tag, .. } => Message::SpinnerTick { tag },
        }
    }

    /// Returns how long the event loop should wait before delivering it.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::ScheduleSpinnerTick { after, .. } => after,
        }
    }
}
