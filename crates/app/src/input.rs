//! Key handling for the command bar.
//!
//! Turns terminal key events into view messages and app-level actions.
//! Holds the edit buffer and the input mode; knows nothing about the
//! terminal or the history.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gurl_ui::Message;

/// Mode in which every edit re-filters the history.
pub const FILTER_MODE: &str = "filter";
/// Mode entered with `:` for commands.
pub const CMD_MODE: &str = "cmd";

/// What a key asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send a message to the screen.
    Emit(Message),
    /// Report the selected history record.
    ShowSelected,
    /// Reload the history from disk.
    Reload,
    /// Leave the program.
    Quit,
}

/// Edit buffer plus current and default mode.
#[derive(Debug, Clone)]
pub struct Input {
    buffer: String,
    mode: String,
    default_mode: String,
}

impl Input {
    /// Creates an empty buffer in `default_mode`.
    #[must_use]
    pub fn new(default_mode: impl Into<String>) -> Self {
        let default_mode = default_mode.into();
        Self {
            buffer: String::new(),
            mode: default_mode.clone(),
            default_mode,
        }
    }

    /// Messages that sync a fresh screen with this input state.
    #[must_use]
    pub fn initial_messages(&self) -> Vec<Message> {
        vec![
            Message::ModeChanged(self.mode.clone()),
            Message::CommandBufferChanged(self.buffer.clone()),
        ]
    }

    /// Returns the edit buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Handles one key event. Releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => vec![Action::Quit],
                _ => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Esc => self.reset(),
            KeyCode::Up => vec![Action::Emit(Message::SelectPrevious)],
            KeyCode::Down => vec![Action::Emit(Message::SelectNext)],
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(':') if self.buffer.is_empty() && self.mode != CMD_MODE => {
                CMD_MODE.clone_into(&mut self.mode);
                vec![Action::Emit(Message::ModeChanged(self.mode.clone()))]
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.buffer.push(c);
                self.edited()
            }
            _ => Vec::new(),
        }
    }

    fn in_filter_mode(&self) -> bool {
        self.mode == FILTER_MODE
    }

    fn edited(&self) -> Vec<Action> {
        let mut actions = vec![Action::Emit(Message::CommandBufferChanged(
            self.buffer.clone(),
        ))];
        if self.in_filter_mode() {
            actions.push(Action::Emit(Message::FilterChanged(self.buffer.clone())));
        }
        actions
    }

    fn backspace(&mut self) -> Vec<Action> {
        if self.buffer.pop().is_some() {
            return self.edited();
        }
        if self.mode == CMD_MODE {
            return self.reset();
        }
        Vec::new()
    }

    fn reset(&mut self) -> Vec<Action> {
        self.buffer.clear();
        self.default_mode.clone_into(&mut self.mode);

        let mut actions = vec![
            Action::Emit(Message::CommandBufferChanged(String::new())),
            Action::Emit(Message::ModeChanged(self.mode.clone())),
        ];
        if self.in_filter_mode() {
            actions.push(Action::Emit(Message::FilterChanged(String::new())));
        }
        actions
    }

    fn submit(&mut self) -> Vec<Action> {
        if self.mode != CMD_MODE {
            return vec![Action::ShowSelected];
        }

        let command = self.buffer.trim().to_string();
        let mut actions = self.reset();
        match command.as_str() {
            "q" | "quit" => return vec![Action::Quit],
            "r" | "reload" => actions.push(Action::Reload),
            "" => {}
            other => actions.push(Action::Emit(Message::ShortMessageChanged(format!(
                "unknown command: {other}"
            )))),
        }
        actions
    }
}
