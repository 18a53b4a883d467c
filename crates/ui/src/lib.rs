//! Gurl UI - Terminal view state
//!
//! This crate holds the two message-driven state machines of the terminal
//! client, the history browser and the status/command bar, plus the
//! [`Screen`] that fans one message stream out to both. Nothing here touches
//! the terminal: rendering produces plain, width-complete text.

pub mod bridge;
pub mod screen;
pub mod spinner;
pub mod state;
pub mod text;

pub use bridge::{Command, Message};
pub use screen::Screen;
pub use spinner::{SPINNER_FRAMES, SPINNER_INTERVAL, Spinner};
pub use state::{
    BrowserError, DisplayItem, ELLIPSIS_MARKER, HistoryBrowser, Segment, StatusBar, Tone,
    matches_filter, truncate_command,
};
