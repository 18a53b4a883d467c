//! Message-driven view state.

mod history_browser;
mod status_bar;

pub use history_browser::{BrowserError, DisplayItem, HistoryBrowser, matches_filter};
pub use status_bar::{ELLIPSIS_MARKER, Segment, StatusBar, Tone, truncate_command};
