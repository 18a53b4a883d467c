//! Terminal setup and the main event loop.

use std::io::{self, Stdout};
use std::ops::ControlFlow;

use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use gurl_application::{Clock, HistoryStorage, HistoryStore};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::app::App;
use crate::error::AppResult;
use crate::view;

/// Raw-mode alternate screen, restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> AppResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!(error = %err, "failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Runs `app` until the user quits or the terminal fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub async fn run<St, H, C>(mut app: App<St, H, C>) -> AppResult<()>
where
    St: HistoryStorage + 'static,
    H: HistoryStore + 'static,
    C: Clock,
{
    let mut guard = TerminalGuard::enter()?;
    let size = guard.terminal.size()?;
    app.resize(size.width, size.height);

    let mut events = EventStream::new();
    loop {
        guard.terminal.draw(|frame| view::draw(frame, app.screen()))?;

        tokio::select! {
            Some(background) = app.next_background() => app.handle_background(background),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if app.handle_event(&event).is_break() {
                        break;
                    }
                }
                Some(Err(err)) => return Err(err.into()),
                None => {
                    debug!("terminal event stream closed");
                    break;
                }
            },
        }
    }
    Ok(())
}
