//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, LineGauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::App;
use crate::audio::PlaybackService;
use crate::config::{ControlsSettings, TimeField, UiSettings};
use crate::player::{PlaybackState, ProgressSnapshot};

const PADDED: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

/// Render the controls help text, incorporating seek seconds.
fn controls_text(seek_seconds: u64) -> String {
    [
        "[a] add".to_string(),
        "[d] delete".to_string(),
        "[enter] play".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next song".to_string(),
        "[j/k] move cursor".to_string(),
        format!("[H/L] seek -/+{seek_seconds}s"),
        "[s] stop".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Build the time text (elapsed/total/remaining) per `UiSettings`.
fn time_text(progress: &ProgressSnapshot, ui: &UiSettings) -> Option<String> {
    let parts: Vec<String> = ui
        .time_fields
        .iter()
        .filter_map(|f| match f {
            TimeField::Elapsed => Some(format_mmss(progress.elapsed)),
            TimeField::Total => progress.total.map(format_mmss),
            TimeField::Remaining => progress
                .total
                .map(|t| format!("-{}", format_mmss(t.saturating_sub(progress.elapsed)))),
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.time_separator))
    }
}

fn state_text(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Stopped => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    }
}

fn status_text<P: PlaybackService>(app: &App<P>, ui: &UiSettings) -> String {
    let mut parts = vec![
        state_text(app.player.state()).to_string(),
        app.player.now_playing_label(),
    ];
    if let Some(time) = app.progress.as_ref().and_then(|p| time_text(p, ui)) {
        parts.push(time);
    }
    let playlist = app.player.playlist();
    if playlist.is_empty() {
        parts.push("playlist empty".to_string());
    } else {
        parts.push(format!("{} in playlist", playlist.len()));
    }
    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<P: PlaybackService>(
    frame: &mut Frame,
    app: &App<P>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" reprise ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status
    let status = Paragraph::new(status_text(app, ui_settings))
        .block(Block::bordered().padding(PADDED).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Playlist, head to tail, with the cursor highlighted.
    {
        let playlist = app.player.playlist();
        let total = playlist.len();
        let list_height = chunks[2].height.saturating_sub(2) as usize;
        let cursor = playlist.cursor_index();
        let sel = cursor.unwrap_or(0);

        // Only build items for the visible window, keeping the cursor centred.
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let start = sel.saturating_sub(half).min(total - list_height);
            (start, start + list_height)
        };

        let items: Vec<ListItem> = playlist
            .iter()
            .skip(start)
            .take(end - start)
            .map(|t| ListItem::new(t.name.as_str()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(cursor.map(|c| c - start));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Progress
    {
        let progress = app.progress.unwrap_or_default();
        let label = time_text(&progress, ui_settings).unwrap_or_default();
        let gauge = LineGauge::default()
            .block(Block::bordered().padding(PADDED).title(" progress "))
            .filled_style(Style::default().add_modifier(Modifier::BOLD))
            .unfilled_style(Style::default().add_modifier(Modifier::DIM))
            .label(label)
            .ratio(progress.ratio());
        frame.render_widget(gauge, chunks[3]);
    }

    // Prompt or notice
    let (title, body) = if app.prompt_open {
        (" add file (enter: add, esc: cancel) ", format!("{}_", app.prompt.input()))
    } else {
        (" notice ", app.notice.clone().unwrap_or_default())
    };
    let prompt = Paragraph::new(body)
        .block(Block::bordered().padding(PADDED).title(title));
    let prompt = if app.prompt_open { prompt.bold() } else { prompt };
    frame.render_widget(prompt, chunks[4]);

    let footer = Paragraph::new(controls_text(controls_settings.seek_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(PADDED),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
