//! Application state and event handling.

use std::ops::ControlFlow;
use std::sync::Arc;

use crossterm::event::Event;
use gurl_application::{
    ApplicationResult, Clock, HistoryStorage, HistoryStore, ReloadHistory, ReloadHistoryOutput,
};
use gurl_domain::Status;
use gurl_ui::{Command, Message, Screen};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::input::{Action, Input};

/// Capacity of the message channel fed by background tasks.
const CHANNEL_CAPACITY: usize = 64;

/// Results delivered to the loop by spawned tasks.
#[derive(Debug)]
pub enum Background {
    /// A scheduled message came due.
    Message(Message),
    /// A history reload finished.
    Reloaded(ApplicationResult<ReloadHistoryOutput>),
}

/// Screen, input state and the plumbing for background work.
pub struct App<St, H, C>
where
    St: HistoryStorage + 'static,
    H: HistoryStore + 'static,
    C: Clock,
{
    screen: Screen<H, C>,
    input: Input,
    reload: Arc<ReloadHistory<St, H>>,
    history_limit: usize,
    reloading: bool,
    tx: mpsc::Sender<Background>,
    rx: mpsc::Receiver<Background>,
}

impl<St, H, C> App<St, H, C>
where
    St: HistoryStorage + 'static,
    H: HistoryStore + 'static,
    C: Clock,
{
    /// Creates the app and syncs the screen with the input state.
    pub fn new(
        screen: Screen<H, C>,
        input: Input,
        reload: ReloadHistory<St, H>,
        history_limit: usize,
    ) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let mut app = Self {
            screen,
            input,
            reload: Arc::new(reload),
            history_limit,
            reloading: false,
            tx,
            rx,
        };
        for msg in app.input.initial_messages() {
            app.dispatch(msg);
        }
        app
    }

    /// Returns the screen.
    pub const fn screen(&self) -> &Screen<H, C> {
        &self.screen
    }

    /// Waits for the next result from a background task.
    pub async fn next_background(&mut self) -> Option<Background> {
        self.rx.recv().await
    }

    /// Applies a background result to the screen.
    pub fn handle_background(&mut self, background: Background) {
        match background {
            Background::Message(msg) => self.dispatch(msg),
            Background::Reloaded(result) => self.finish_reload(result),
        }
    }

    /// Sends `msg` to the screen and runs whatever it asks for.
    pub fn dispatch(&mut self, msg: Message) {
        if let Some(cmd) = self.screen.update(&msg) {
            self.execute(cmd);
        }
    }

    fn execute(&self, cmd: Command) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(cmd.delay()).await;
            // The loop may already be gone.
            let _ = tx.send(Background::Message(cmd.message())).await;
        });
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> ControlFlow<()> {
        match event {
            Event::Key(key) => {
                for action in self.input.handle_key(*key) {
                    if self.apply(action).is_break() {
                        return ControlFlow::Break(());
                    }
                }
            }
            Event::Resize(width, height) => self.resize(*width, *height),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    /// Forwards a terminal size, keeping one row for the status bar.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.dispatch(Message::Resize {
            width,
            height: height.saturating_sub(1),
        });
    }

    fn apply(&mut self, action: Action) -> ControlFlow<()> {
        match action {
            Action::Emit(msg) => self.dispatch(msg),
            Action::ShowSelected => self.show_selected(),
            Action::Reload => self.start_reload(),
            Action::Quit => {
                info!("quit requested");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn show_selected(&mut self) {
        let (status, text) = match self.screen.browser().selected() {
            Ok(record) if record.is_completed() => (Status::Code(record.status), record.summary()),
            Ok(record) => (Status::Idle, record.summary()),
            Err(err) => (Status::Idle, err.to_string()),
        };
        self.dispatch(Message::StatusChanged(status));
        self.dispatch(Message::ShortMessageChanged(text));
    }

    /// Reloads the history in the background.
    ///
    /// The bar shows `Processing` until the result comes back. A request
    /// made while a reload is running is ignored.
    pub fn start_reload(&mut self) {
        if self.reloading {
            debug!("reload already running");
            return;
        }
        self.reloading = true;
        self.dispatch(Message::StatusChanged(Status::Processing));
        self.dispatch(Message::ShortMessageChanged("reloading".to_string()));

        let reload = Arc::clone(&self.reload);
        let limit = self.history_limit;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = reload.execute(limit).await;
            let _ = tx.send(Background::Reloaded(result)).await;
        });
    }

    fn finish_reload(&mut self, result: ApplicationResult<ReloadHistoryOutput>) {
        self.reloading = false;
        match result {
            Ok(output) => {
                debug!(records = output.records, "reload finished");
                self.dispatch(Message::HistoryInvalidated);
                self.dispatch(Message::StatusChanged(Status::Idle));
                self.dispatch(Message::ShortMessageChanged(format!(
                    "{} records",
                    output.records
                )));
            }
            Err(err) => {
                warn!(error = %err, "reload failed");
                self.dispatch(Message::StatusChanged(Status::Error));
                self.dispatch(Message::ShortMessageChanged(err.to_string()));
            }
        }
    }
}
