//! Drawing the screen with ratatui.

use gurl_application::{Clock, HistoryStore};
use gurl_ui::{Screen, Segment, Tone};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// Maps a segment tone to a terminal style.
#[must_use]
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Muted => Style::default().fg(Color::DarkGray),
        Tone::Emphasis => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Success => Style::default().fg(Color::Green),
        Tone::Failure => Style::default().fg(Color::Red),
    }
}

fn status_line(segments: Vec<Segment>) -> Line<'static> {
    Line::from(
        segments
            .into_iter()
            .map(|segment| Span::styled(segment.text, tone_style(segment.tone)))
            .collect::<Vec<_>>(),
    )
}

/// Draws the history list above the one-row status bar.
pub fn draw<S: HistoryStore, C: Clock>(frame: &mut Frame, screen: &Screen<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let browser = screen.browser();
    let items: Vec<ListItem> = browser
        .items()
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    item.key().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(item.value().to_string(), tone_style(Tone::Muted))),
            ])
        })
        .collect();

    let title = if browser.filter().is_empty() {
        " history ".to_string()
    } else {
        format!(" history /{} ", browser.filter())
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_symbol("│ ")
        .highlight_style(Style::default().fg(Color::Cyan));

    let mut state = ListState::default();
    state.select(browser.selected_index());
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let bar = status_line(screen.status_bar().segments());
    frame.render_widget(Paragraph::new(bar), chunks[1]);
}
