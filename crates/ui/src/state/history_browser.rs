//! UI state for the history browser.

use gurl_application::{Clock, HistoryStore};
use gurl_domain::{HistoryRecord, relative_time};
use thiserror::Error;
use tracing::debug;

use crate::bridge::Message;
use crate::text::{align_left, align_right, half_width};

/// Columns taken off each value column.
const COLUMN_MARGIN: u16 = 4;

/// Rows and columns the surrounding frame takes from the list viewport.
const LIST_INSET: u16 = 2;

/// Recoverable browser errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BrowserError {
    /// The visible set is empty.
    #[error("nothing selected")]
    NoSelection,
}

/// A list row: search key, pre-rendered value, and the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem<R> {
    key: String,
    value: String,
    reference: R,
}

impl<R> DisplayItem<R> {
    /// Returns the `"METHOD url"` key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the two-column value line.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the originating record.
    #[must_use]
    pub const fn reference(&self) -> &R {
        &self.reference
    }
}

impl DisplayItem<HistoryRecord> {
    fn from_record(record: HistoryRecord, column: usize, now_label: &str) -> Self {
        Self {
            key: record.summary(),
            value: render_value(&record, column, now_label),
            reference: record,
        }
    }
}

fn render_value(record: &HistoryRecord, column: usize, when: &str) -> String {
    let left = align_left(&record.status.to_string(), column);
    let detail = format!("{when} ${} {}", record.id, record.annotation);
    let right = align_right(&detail, column);
    format!("{left}{right}")
}

/// Returns true if `record` passes the filter `token`.
///
/// A record matches when its decimal id starts with `token` or its
/// annotation contains it. The empty token matches everything.
#[must_use]
pub fn matches_filter(record: &HistoryRecord, token: &str) -> bool {
    record.id.to_string().starts_with(token) || record.annotation.contains(token)
}

/// Filterable, selectable view over the persisted history.
///
/// The record cache is fetched lazily on the first message and replaced
/// wholesale on `HistoryInvalidated`. The visible items always reflect the
/// current filter token.
#[derive(Debug)]
pub struct HistoryBrowser<S: HistoryStore, C: Clock> {
    store: S,
    clock: C,
    records: Vec<HistoryRecord>,
    filter: String,
    width: u16,
    list_size: (u16, u16),
    initialized: bool,
    items: Vec<DisplayItem<HistoryRecord>>,
    selected: Option<usize>,
}

impl<S: HistoryStore, C: Clock> HistoryBrowser<S, C> {
    /// Creates an uninitialized browser. Nothing is fetched until the first
    /// message or an explicit [`Self::initialize`].
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            records: Vec::new(),
            filter: String::new(),
            width: 0,
            list_size: (0, 0),
            initialized: false,
            items: Vec::new(),
            selected: None,
        }
    }

    /// Applies one message.
    pub fn update(&mut self, msg: &Message) {
        self.initialize();

        match msg {
            Message::Resize { width, height } => self.resize(*width, *height),
            Message::FilterChanged(token) => self.apply_filter(token),
            Message::HistoryInvalidated => self.refresh(),
            Message::SelectNext => self.select_next(),
            Message::SelectPrevious => self.select_previous(),
            _ => {}
        }
    }

    /// Fetches the record set once. Later calls do nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.records = self.store.history();
        self.initialized = true;
        debug!(records = self.records.len(), "history browser initialized");
        self.rebuild();
    }

    /// Re-fetches the record set and selects the first visible item.
    pub fn refresh(&mut self) {
        self.records = self.store.history();
        self.initialized = true;
        debug!(records = self.records.len(), "history refreshed");
        self.rebuild();
    }

    /// Recomputes the visible items for `token` and resets the selection.
    pub fn apply_filter(&mut self, token: &str) {
        token.clone_into(&mut self.filter);
        self.rebuild();
        debug!(token, visible = self.items.len(), "history filter applied");
    }

    /// Records the viewport size and re-renders values for the new width.
    ///
    /// The visible set and the selection are left alone.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.list_size = (
            width.saturating_sub(LIST_INSET),
            height.saturating_sub(LIST_INSET),
        );

        let column = self.column_width();
        let now = self.clock.now();
        for item in &mut self.items {
            let when = relative_time(item.reference.date, now);
            item.value = render_value(&item.reference, column, &when);
        }
    }

    fn rebuild(&mut self) {
        let column = self.column_width();
        let now = self.clock.now();
        self.items = self
            .records
            .iter()
            .filter(|record| matches_filter(record, &self.filter))
            .map(|record| {
                let when = relative_time(record.date, now);
                DisplayItem::from_record(record.clone(), column, &when)
            })
            .collect();
        self.selected = if self.items.is_empty() { None } else { Some(0) };
    }

    const fn column_width(&self) -> usize {
        half_width(self.width, COLUMN_MARGIN)
    }

    /// Moves the selection down, stopping at the last item.
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some((index + 1).min(self.items.len().saturating_sub(1)));
        }
    }

    /// Moves the selection up, stopping at the first item.
    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    /// Returns the record behind the selected item.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::NoSelection`] when nothing is visible.
    pub fn selected(&self) -> Result<&HistoryRecord, BrowserError> {
        let index = self.selected.ok_or(BrowserError::NoSelection)?;
        debug_assert!(index < self.items.len(), "selection outside visible items");
        self.items
            .get(index)
            .map(DisplayItem::reference)
            .ok_or(BrowserError::NoSelection)
    }

    /// Returns the selected index, `None` iff nothing is visible.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the visible items in cache order.
    #[must_use]
    pub fn items(&self) -> &[DisplayItem<HistoryRecord>] {
        &self.items
    }

    /// Returns the active filter token.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns the list viewport size as `(width, height)`.
    #[must_use]
    pub const fn list_size(&self) -> (u16, u16) {
        self.list_size
    }

    /// Renders the visible items as plain text.
    ///
    /// Each item takes two lines, key then value, with a bar marking the
    /// selection. One blank line frames the list above and below.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("\n");
        for (index, item) in self.items.iter().enumerate() {
            let cursor = if self.selected == Some(index) { "│ " } else { "  " };
            out.push_str(&format!("{cursor}{}\n{cursor}{}\n", item.key, item.value));
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use gurl_domain::{HttpMethod, RequestHistory};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[derive(Default)]
    struct MemoryStore {
        history: Mutex<RequestHistory>,
        fetches: Mutex<usize>,
    }

    impl HistoryStore for MemoryStore {
        fn history(&self) -> Vec<HistoryRecord> {
            *self.fetches.lock() += 1;
            self.history.lock().to_vec()
        }

        fn replace(&self, history: RequestHistory) {
            *self.history.lock() = history;
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn store_with(entries: &[(u16, &str)]) -> Arc<MemoryStore> {
        let mut history = RequestHistory::new(100);
        for (status, annotation) in entries {
            history.record(HttpMethod::Get, "https://api.test", *status, noon(), *annotation);
        }
        let store = Arc::new(MemoryStore::default());
        store.replace(history);
        store
    }

    fn browser(store: &Arc<MemoryStore>) -> HistoryBrowser<Arc<MemoryStore>, FixedClock> {
        let mut browser = HistoryBrowser::new(Arc::clone(store), FixedClock(noon()));
        browser.initialize();
        browser
    }

    fn visible_ids<S: HistoryStore, C: Clock>(browser: &HistoryBrowser<S, C>) -> Vec<u64> {
        browser.items().iter().map(|item| item.reference().id).collect()
    }

    #[test]
    fn fetches_lazily_and_once() {
        let store = store_with(&[(200, "login")]);
        let mut browser = HistoryBrowser::new(Arc::clone(&store), FixedClock(noon()));
        assert_eq!(*store.fetches.lock(), 0);

        browser.update(&Message::CommandBufferChanged(String::new()));
        browser.update(&Message::CommandBufferChanged(String::new()));

        assert_eq!(*store.fetches.lock(), 1);
        assert_eq!(browser.items().len(), 1);
    }

    #[test]
    fn filters_by_id_prefix_or_annotation() {
        let store = store_with(&[(200, "login"), (404, "checkout")]);
        let mut browser = browser(&store);

        browser.apply_filter("1");
        assert_eq!(visible_ids(&browser), vec![1]);

        browser.apply_filter("check");
        assert_eq!(visible_ids(&browser), vec![2]);

        browser.apply_filter("9");
        assert!(visible_ids(&browser).is_empty());
        assert_eq!(browser.selected(), Err(BrowserError::NoSelection));
        assert_eq!(browser.selected_index(), None);
    }

    #[test]
    fn empty_token_shows_everything_in_cache_order() {
        let store = store_with(&[(200, "a"), (201, "b"), (202, "c")]);
        let mut browser = browser(&store);

        browser.apply_filter("zzz");
        browser.apply_filter("");

        assert_eq!(visible_ids(&browser), vec![3, 2, 1]);
    }

    #[test]
    fn id_match_is_a_prefix_not_a_substring() {
        let annotations: Vec<(u16, &str)> = (0..12).map(|_| (200, "")).collect();
        let store = store_with(&annotations);
        let mut browser = browser(&store);

        browser.apply_filter("1");

        assert_eq!(visible_ids(&browser), vec![12, 11, 10, 1]);
    }

    #[test]
    fn filtering_resets_selection_to_first() {
        let store = store_with(&[(200, "x"), (200, "x"), (200, "x")]);
        let mut browser = browser(&store);
        browser.select_next();
        browser.select_next();
        assert_eq!(browser.selected_index(), Some(2));

        browser.apply_filter("x");

        assert_eq!(browser.selected_index(), Some(0));
        assert_eq!(browser.selected().unwrap().id, 3);
    }

    #[test]
    fn same_filter_twice_is_idempotent() {
        let store = store_with(&[(200, "login"), (500, "login retry")]);
        let mut browser = browser(&store);

        browser.apply_filter("login");
        let first = (browser.items().to_vec(), browser.selected_index());
        browser.apply_filter("login");

        assert_eq!((browser.items().to_vec(), browser.selected_index()), first);
    }

    #[test]
    fn refresh_picks_up_new_records_and_keeps_filter() {
        let store = store_with(&[(200, "login")]);
        let mut browser = browser(&store);
        browser.apply_filter("log");

        let mut history = RequestHistory::new(100);
        history.record(HttpMethod::Get, "https://a.test", 200, noon(), "login");
        history.record(HttpMethod::Post, "https://b.test", 201, noon(), "signup");
        history.record(HttpMethod::Get, "https://c.test", 200, noon(), "logout");
        store.replace(history);
        browser.update(&Message::HistoryInvalidated);

        assert_eq!(visible_ids(&browser), vec![3, 1]);
        assert_eq!(browser.selected_index(), Some(0));
    }

    #[test]
    fn refresh_of_empty_history_clears_selection() {
        let store = store_with(&[(200, "login")]);
        let mut browser = browser(&store);
        store.replace(RequestHistory::default());

        browser.refresh();

        assert_eq!(browser.selected(), Err(BrowserError::NoSelection));
    }

    #[test]
    fn selection_is_clamped() {
        let store = store_with(&[(200, ""), (200, "")]);
        let mut browser = browser(&store);

        browser.select_previous();
        assert_eq!(browser.selected_index(), Some(0));

        browser.update(&Message::SelectNext);
        browser.update(&Message::SelectNext);
        assert_eq!(browser.selected_index(), Some(1));
        assert_eq!(browser.selected().unwrap().id, 1);
    }

    #[test]
    fn values_split_into_two_columns() {
        let store = store_with(&[(404, "checkout")]);
        let mut browser = browser(&store);

        browser.update(&Message::Resize {
            width: 60,
            height: 20,
        });

        let value = browser.items()[0].value();
        assert_eq!(value.len(), 52);
        assert!(value.starts_with(&format!("404{}", " ".repeat(23))));
        assert!(value.ends_with("just now $1 checkout"));
        assert_eq!(browser.list_size(), (58, 18));
        assert_eq!(browser.items()[0].key(), "GET https://api.test");
    }

    #[test]
    fn empty_annotation_keeps_the_separator_column() {
        let store = store_with(&[(201, "")]);
        let mut browser = browser(&store);

        browser.resize(40, 10);

        let value = browser.items()[0].value();
        assert_eq!(value, format!("201{}{}just now $1 ", " ".repeat(13), " ".repeat(4)));
    }

    #[test]
    fn resize_keeps_selection() {
        let store = store_with(&[(200, ""), (200, "")]);
        let mut browser = browser(&store);
        browser.select_next();

        browser.resize(80, 24);

        assert_eq!(browser.selected_index(), Some(1));
    }

    #[test]
    fn narrow_viewport_degrades_to_unpadded_fields() {
        let store = store_with(&[(200, "")]);
        let mut browser = browser(&store);

        browser.resize(6, 2);

        assert_eq!(browser.items()[0].value(), "200just now $1 ");
        assert_eq!(browser.list_size(), (4, 0));
    }

    #[test]
    fn render_marks_selection() {
        let store = store_with(&[(200, "a"), (201, "b")]);
        let browser = browser(&store);

        let text = browser.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "│ GET https://api.test");
        assert_eq!(lines[3], "  GET https://api.test");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn matches_filter_rule() {
        let record = HistoryRecord {
            id: 42,
            method: HttpMethod::Get,
            url: "https://x.test".to_string(),
            status: 200,
            date: noon(),
            annotation: "nightly sync".to_string(),
        };

        assert!(matches_filter(&record, ""));
        assert!(matches_filter(&record, "4"));
        assert!(matches_filter(&record, "42"));
        assert!(!matches_filter(&record, "2"));
        assert!(matches_filter(&record, "sync"));
        assert!(!matches_filter(&record, "Sync"));
    }
}
