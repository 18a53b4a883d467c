//! Processing spinner driven by scheduled ticks.
//!
//! The spinner owns no timer. Arming it returns a [`Command`] asking the event
//! loop for one tick; each accepted tick advances a frame and asks for the
//! next. Every arm bumps the tag, so a tick left over from an earlier loop is
//! recognised and dropped. At most one loop is live per spinner.

use std::time::Duration;

use crate::bridge::Command;

/// Braille dot frames.
pub const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Delay between frames.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Frame counter plus the tag of the live tick loop.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
    tag: u64,
}

impl Spinner {
    /// Creates a spinner on its first frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new tick loop, invalidating any tick still in flight.
    pub const fn arm(&mut self) -> Command {
        self.tag = self.tag.wrapping_add(1);
        Command::ScheduleSpinnerTick {
            tag: self.tag,
            after: SPINNER_INTERVAL,
        }
    }

    /// Handles a delivered tick.
    ///
    /// Returns the follow-up tick for the live loop, or `None` for a stale tag.
    pub const fn advance(&mut self, tag: u64) -> Option<Command> {
        if tag != self.tag {
            return None;
        }
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        Some(Command::ScheduleSpinnerTick {
            tag,
            after: SPINNER_INTERVAL,
        })
    }

    /// Returns the current glyph.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Returns the current frame index.
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.frame
    }
}
