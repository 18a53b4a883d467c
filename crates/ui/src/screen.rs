//! Top-level view: the history browser above the status bar.

use gurl_application::{Clock, HistoryStore};

use crate::bridge::{Command, Message};
use crate::state::{HistoryBrowser, StatusBar};

/// Routes every message to both components and stacks their output.
#[derive(Debug)]
pub struct Screen<S: HistoryStore, C: Clock> {
    browser: HistoryBrowser<S, C>,
    status_bar: StatusBar,
}

impl<S: HistoryStore, C: Clock> Screen<S, C> {
    /// Creates a screen from its two components.
    #[must_use]
    pub const fn new(browser: HistoryBrowser<S, C>, status_bar: StatusBar) -> Self {
        Self {
            browser,
            status_bar,
        }
    }

    /// Applies one message to both components.
    ///
    /// Returns the command the status bar asked for, if any.
    pub fn update(&mut self, msg: &Message) -> Option<Command> {
        self.browser.update(msg);
        self.status_bar.update(msg)
    }

    /// Returns the history browser.
    #[must_use]
    pub const fn browser(&self) -> &HistoryBrowser<S, C> {
        &self.browser
    }

    /// Returns the status bar.
    #[must_use]
    pub const fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    /// Renders the browser, then the status bar on its own line.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n{}", self.browser.render(), self.status_bar.render())
    }
}
