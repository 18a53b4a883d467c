//! UI state for the status/command bar.

use std::borrow::Cow;

use gurl_domain::{Status, StatusClass};

use crate::bridge::{Command, Message};
use crate::spinner::Spinner;
use crate::text::{display_width, half_width, head_columns, padding_for, tail_columns};

/// Columns taken off each half of the bar.
const HALF_MARGIN: u16 = 2;

/// Marker that replaces the dropped head of a long command buffer.
pub const ELLIPSIS_MARKER: &str = "> …";

/// Style-abstract category of a piece of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Unstyled text and padding.
    #[default]
    Plain,
    /// De-emphasised text (idle label, short message, mode).
    Muted,
    /// Highlighted text (error label).
    Emphasis,
    /// A result code below 400.
    Success,
    /// A result code of 400 or above.
    Failure,
}

/// A run of text sharing one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The text, already laid out.
    pub text: String,
    /// How the front-end should style it.
    pub tone: Tone,
}

impl Segment {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

/// Fits the command buffer into the right half of the bar.
///
/// With `available = half - (mode columns + 2)`, a buffer wider than
/// `available` keeps only its last `available - 3` columns behind
/// [`ELLIPSIS_MARKER`]. When `half` or `available` is not positive the buffer
/// is returned unchanged.
#[must_use]
pub fn truncate_command<'a>(buffer: &'a str, half: usize, mode: &str) -> Cow<'a, str> {
    let Some(available) = half.checked_sub(display_width(mode) + 2) else {
        return Cow::Borrowed(buffer);
    };
    if half == 0 || available == 0 || display_width(buffer) <= available {
        return Cow::Borrowed(buffer);
    }

    let kept = tail_columns(buffer, available.saturating_sub(display_width(ELLIPSIS_MARKER)));
    Cow::Owned(format!("{ELLIPSIS_MARKER}{kept}"))
}

/// State for the status/command bar.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    status: Status,
    spinner: Spinner,
    spinning: bool,
    width: u16,
    command_buffer: String,
    short_message: String,
    mode: String,
}

impl StatusBar {
    /// Creates an idle, non-spinning bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one message, returning the tick to schedule, if any.
    pub fn update(&mut self, msg: &Message) -> Option<Command> {
        match msg {
            Message::CommandBufferChanged(text) => self.set_command_buffer(text.clone()),
            Message::StatusChanged(status) => return self.set_status(*status),
            Message::Resize { width, .. } => self.resize(*width),
            Message::ShortMessageChanged(text) => self.set_short_message(text.clone()),
            Message::ModeChanged(text) => self.set_mode(text.clone()),
            Message::SpinnerTick { tag } => return self.on_tick(*tag),
            _ => {}
        }
        None
    }

    /// Replaces the command buffer verbatim.
    pub fn set_command_buffer(&mut self, text: String) {
        self.command_buffer = text;
    }

    /// Replaces the short message.
    pub fn set_short_message(&mut self, text: String) {
        self.short_message = text;
    }

    /// Replaces the input mode label.
    pub fn set_mode(&mut self, text: String) {
        self.mode = text;
    }

    /// Records the viewport width.
    pub const fn resize(&mut self, width: u16) {
        self.width = width;
    }

    /// Replaces the status.
    ///
    /// Entering `Processing` while not spinning arms the spinner and returns
    /// its first tick. Any other status stops spinning at once; a tick already
    /// in flight will be ignored when it lands.
    pub fn set_status(&mut self, status: Status) -> Option<Command> {
        self.status = status;
        if !status.is_processing() {
            self.spinning = false;
            return None;
        }
        if self.spinning {
            return None;
        }
        self.spinning = true;
        Some(self.spinner.arm())
    }

    fn on_tick(&mut self, tag: u64) -> Option<Command> {
        if !self.spinning || !self.status.is_processing() {
            return None;
        }
        self.spinner.advance(tag)
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns true while the spinner loop is live.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Returns the spinner.
    #[must_use]
    pub const fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Returns the short message.
    #[must_use]
    pub fn short_message(&self) -> &str {
        &self.short_message
    }

    /// Returns the input mode label.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    fn status_label(&self) -> Segment {
        match self.status {
            Status::Processing => {
                Segment::plain(format!("{} Processing", self.spinner.glyph()))
            }
            Status::Idle => Segment::new("Idle", Tone::Muted),
            Status::Error => Segment::new("Error", Tone::Emphasis),
            Status::Code(code) => {
                let tone = match StatusClass::of(code) {
                    StatusClass::Success => Tone::Success,
                    StatusClass::Failure => Tone::Failure,
                };
                Segment::new(code.to_string(), tone)
            }
        }
    }

    /// Lays out the bar as tone-tagged segments.
    ///
    /// Left half: status label and short message, left-aligned and cut to
    /// the half width. Right half:
    /// command buffer and `:mode`, right-aligned. The halves are joined by a
    /// space and the line is padded to the viewport width.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let half = half_width(self.width, HALF_MARGIN);

        let mut left = vec![
            self.status_label(),
            Segment::plain(" "),
            Segment::new(self.short_message.clone(), Tone::Muted),
        ];
        if half > 0 {
            clip_to(&mut left, half);
        }
        let left_pad = padding_for(&concat(&left), half);
        left.push(Segment::plain(" ".repeat(left_pad)));

        let command = truncate_command(&self.command_buffer, half, &self.mode);
        let right = [
            Segment::plain(format!("{command} :")),
            Segment::new(self.mode.clone(), Tone::Muted),
        ];
        let right_pad = padding_for(&concat(&right), half);

        let mut segments = left;
        segments.push(Segment::plain(" "));
        segments.push(Segment::plain(" ".repeat(right_pad)));
        segments.extend(right);

        let line_pad = padding_for(&concat(&segments), usize::from(self.width));
        if line_pad > 0 {
            segments.push(Segment::plain(" ".repeat(line_pad)));
        }
        segments.retain(|segment| !segment.text.is_empty());
        segments
    }

    /// Renders the bar as a single unstyled line.
    #[must_use]
    pub fn render(&self) -> String {
        concat(&self.segments())
    }
}

/// Cuts the run of segments so that together they span at most `columns`.
fn clip_to(segments: &mut [Segment], columns: usize) {
    let mut budget = columns;
    for segment in segments {
        let kept = head_columns(&segment.text, budget).len();
        segment.text.truncate(kept);
        budget -= display_width(&segment.text);
    }
}

fn concat(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spinner::SPINNER_INTERVAL;
    use pretty_assertions::assert_eq;

    fn bar(width: u16) -> StatusBar {
        let mut bar = StatusBar::new();
        bar.resize(width);
        bar
    }

    #[test]
    fn truncates_head_of_long_command() {
        let out = truncate_command("POST /api/very/long/path", 20, "cmd");
        assert_eq!(out, "> …ry/long/path");
        assert_eq!(display_width(&out), 15);
    }

    #[test]
    fn short_command_is_untouched() {
        assert_eq!(truncate_command("GET /", 20, "cmd"), "GET /");
        assert_eq!(truncate_command("exactly-fifteen", 20, "cmd"), "exactly-fifteen");
    }

    #[test]
    fn no_room_means_no_truncation() {
        let long = "a".repeat(50);
        assert_eq!(truncate_command(&long, 0, "cmd"), long);
        assert_eq!(truncate_command(&long, 5, "cmd"), long);
        assert_eq!(truncate_command(&long, 3, "a-very-long-mode"), long);
    }

    #[test]
    fn tiny_available_keeps_only_marker() {
        assert_eq!(truncate_command("abcdef", 7, "cmd"), ELLIPSIS_MARKER);
    }

    #[test]
    fn entering_processing_arms_once() {
        let mut bar = StatusBar::new();

        let first = bar.update(&Message::StatusChanged(Status::Processing));
        let again = bar.update(&Message::StatusChanged(Status::Processing));

        assert_eq!(
            first,
            Some(Command::ScheduleSpinnerTick {
                tag: 1,
                after: SPINNER_INTERVAL
            })
        );
        assert_eq!(again, None);
        assert!(bar.is_spinning());
    }

    #[test]
    fn leaving_processing_stops_spinning_immediately() {
        let mut bar = StatusBar::new();
        bar.update(&Message::StatusChanged(Status::Processing));

        bar.update(&Message::StatusChanged(Status::Code(200)));

        assert!(!bar.is_spinning());
        assert_eq!(bar.update(&Message::SpinnerTick { tag: 1 }), None);
        assert_eq!(bar.spinner().frame(), 0);
    }

    #[test]
    fn ticks_keep_the_loop_alive_while_processing() {
        let mut bar = StatusBar::new();
        bar.update(&Message::StatusChanged(Status::Processing));

        let next = bar.update(&Message::SpinnerTick { tag: 1 });
        let after = bar.update(&Message::SpinnerTick { tag: 1 });

        assert!(next.is_some());
        assert!(after.is_some());
        assert_eq!(bar.spinner().frame(), 2);
    }

    #[test]
    fn rearming_drops_the_old_loop() {
        let mut bar = StatusBar::new();
        bar.update(&Message::StatusChanged(Status::Processing));
        bar.update(&Message::StatusChanged(Status::Idle));
        let rearmed = bar.update(&Message::StatusChanged(Status::Processing));

        assert_eq!(rearmed.map(Command::message), Some(Message::SpinnerTick { tag: 2 }));
        assert_eq!(bar.update(&Message::SpinnerTick { tag: 1 }), None);
        assert!(bar.update(&Message::SpinnerTick { tag: 2 }).is_some());
    }

    #[test]
    fn unrelated_messages_do_not_schedule() {
        let mut bar = StatusBar::new();
        bar.update(&Message::StatusChanged(Status::Processing));

        assert_eq!(bar.update(&Message::FilterChanged("x".into())), None);
        assert_eq!(bar.update(&Message::CommandBufferChanged("x".into())), None);
        assert!(bar.is_spinning());
    }

    #[test]
    fn renders_both_halves_at_full_width() {
        let mut bar = bar(44);
        bar.set_short_message("ok".into());
        bar.set_command_buffer("POST /api/very/long/path".into());
        bar.set_mode("cmd".into());

        let line = bar.render();

        assert_eq!(display_width(&line), 44);
        assert!(line.starts_with("Idle ok"));
        assert!(line.contains("> …ry/long/path :cmd"));
    }

    #[test]
    fn long_short_message_is_cut_at_the_half() {
        let mut bar = bar(44);
        bar.set_status(Status::Error);
        bar.set_short_message("IO error: permission denied (os error 13)".into());
        bar.set_command_buffer("GET /".into());
        bar.set_mode("cmd".into());

        let line = bar.render();

        assert_eq!(display_width(&line), 44);
        assert!(line.starts_with("Error IO error: perm "));
        let right: String = line.chars().skip(21).take(20).collect();
        assert_eq!(right, format!("{}GET / :cmd", " ".repeat(10)));
    }

    #[test]
    fn right_half_is_right_aligned() {
        let mut bar = bar(44);
        bar.set_command_buffer("GET /".into());
        bar.set_mode("cmd".into());

        let line = bar.render();
        let right: String = line.chars().skip(21).take(20).collect();

        assert_eq!(right, format!("{}GET / :cmd", " ".repeat(10)));
    }

    #[test]
    fn code_tones_split_at_400() {
        let mut bar = bar(40);
        bar.set_status(Status::Code(302));
        assert_eq!(bar.segments()[0], Segment::new("302", Tone::Success));

        bar.set_status(Status::Code(404));
        assert_eq!(bar.segments()[0], Segment::new("404", Tone::Failure));
    }

    #[test]
    fn label_tones() {
        let mut bar = bar(40);
        assert_eq!(bar.segments()[0].tone, Tone::Muted);

        bar.set_status(Status::Error);
        assert_eq!(bar.segments()[0], Segment::new("Error", Tone::Emphasis));

        bar.set_status(Status::Processing);
        assert_eq!(bar.segments()[0].text, "⣾ Processing");
    }

    #[test]
    fn zero_width_renders_unpadded() {
        let mut bar = StatusBar::new();
        bar.set_command_buffer("GET /things".into());
        bar.set_mode("filter".into());

        assert_eq!(bar.render(), "Idle  GET /things :filter");
    }
}
