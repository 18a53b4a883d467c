//! Integration tests for the persisted history flow.
//!
//! These write history and settings files to disk, reload them through the
//! use case, and browse the result the way the terminal client does.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use gurl_application::{Clock, ReloadHistory};
use gurl_domain::{HttpMethod, RequestHistory, UserSettings};
use gurl_infrastructure::{HistoryRepository, SettingsRepository, SnapshotHistoryStore};
use gurl_ui::{HistoryBrowser, Message, Screen, StatusBar};

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()
    }
}

fn sample_history() -> RequestHistory {
    let mut history = RequestHistory::new(100);
    let day = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    history.record(HttpMethod::Post, "https://api.test/login", 200, day, "login");
    history.record(HttpMethod::Get, "https://api.test/cart", 404, day, "checkout");
    history.record(HttpMethod::Put, "https://api.test/cart/7", 0, day, "");
    history
}

#[tokio::test]
async fn reload_honours_history_limit_from_settings() {
    let dir = tempdir().expect("Failed to create temp directory");
    let history_path = dir.path().join("history.json");
    let settings_path = dir.path().join("settings.json");

    HistoryRepository::new(&history_path)
        .save_history(&sample_history())
        .await
        .unwrap();
    let settings = UserSettings {
        history_limit: 2,
        ..UserSettings::default()
    };
    SettingsRepository::new(&settings_path)
        .save(&settings)
        .await
        .unwrap();

    let loaded = SettingsRepository::new(&settings_path).load().await.unwrap();
    let store = Arc::new(SnapshotHistoryStore::default());
    let reload = ReloadHistory::new(HistoryRepository::new(&history_path), Arc::clone(&store));
    let output = reload.execute(loaded.history_limit).await.unwrap();

    assert_eq!(output.records, 2);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn browsing_reloaded_history() {
    let dir = tempdir().expect("Failed to create temp directory");
    let history_path = dir.path().join("history.json");
    HistoryRepository::new(&history_path)
        .save_history(&sample_history())
        .await
        .unwrap();

    let store = Arc::new(SnapshotHistoryStore::default());
    let mut screen = Screen::new(
        HistoryBrowser::new(Arc::clone(&store), FixedClock),
        StatusBar::new(),
    );
    ReloadHistory::new(HistoryRepository::new(&history_path), Arc::clone(&store))
        .execute(100)
        .await
        .unwrap();
    screen.update(&Message::HistoryInvalidated);
    screen.update(&Message::Resize {
        width: 100,
        height: 30,
    });

    let keys: Vec<&str> = screen
        .browser()
        .items()
        .iter()
        .map(|item| item.key())
        .collect();
    assert_eq!(
        keys,
        vec![
            "PUT https://api.test/cart/7",
            "GET https://api.test/cart",
            "POST https://api.test/login",
        ]
    );
    assert!(screen.browser().items()[0].value().ends_with("2d ago $3 "));

    screen.update(&Message::FilterChanged("2".to_string()));
    let selected = screen.browser().selected().unwrap();
    assert_eq!(selected.annotation, "checkout");
    assert_eq!(selected.status, 404);
}

#[tokio::test]
async fn missing_files_give_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");

    let settings = SettingsRepository::new(dir.path().join("settings.json"))
        .load()
        .await
        .unwrap();
    let history = HistoryRepository::new(dir.path().join("history.json"))
        .load_history()
        .await
        .unwrap();

    assert_eq!(settings, UserSettings::default());
    assert!(history.is_empty());
}
