//! gurl - Main Entry Point
//!
//! Resolves configuration, loads settings and history, then hands the
//! terminal to the event loop.

mod app;
mod config;
mod error;
mod input;
mod logging;
mod terminal;
mod view;

use std::sync::Arc;

use gurl_application::ReloadHistory;
use gurl_domain::Status;
use gurl_infrastructure::{
    HistoryRepository, SettingsRepository, SnapshotHistoryStore, SystemClock,
};
use gurl_ui::{HistoryBrowser, Message, Screen, StatusBar};
use tracing::{info, warn};

use crate::app::App;
use crate::config::AppConfig;
use crate::input::Input;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;
    info!(history = %config.history_file.display(), "starting gurl");

    let settings = SettingsRepository::new(&config.settings_file)
        .load_or_create()
        .await?;

    let store = Arc::new(SnapshotHistoryStore::default());
    let reload = ReloadHistory::new(
        HistoryRepository::new(&config.history_file),
        Arc::clone(&store),
    );
    let initial = reload.execute(settings.history_limit).await;

    let screen = Screen::new(
        HistoryBrowser::new(store, SystemClock::new()),
        StatusBar::new(),
    );
    let mut app = App::new(
        screen,
        Input::new(settings.default_mode),
        reload,
        settings.history_limit,
    );
    match initial {
        Ok(output) => info!(records = output.records, "history loaded"),
        Err(err) => {
            warn!(error = %err, "starting with empty history");
            app.dispatch(Message::StatusChanged(Status::Error));
            app.dispatch(Message::ShortMessageChanged(err.to_string()));
        }
    }

    terminal::run(app).await?;
    info!("gurl exited");
    Ok(())
}
