//! Render functions for the TUI.
//!
//! This module handles all rendering logic, dispatching to the appropriate
//! view based on application state.

use crate::app::{App, GalleryView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{cards, dialog, error, skeleton, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Main render dispatch function.
///
/// Routes to the appropriate view renderer based on the fetch state
/// projection. Handles terminal size validation before rendering.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // Three rows: header banner, gallery body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);

    match app.fetch.view() {
        GalleryView::Loading => skeleton::render(f, app, chunks[1]),
        GalleryView::Error => error::render(f, app, chunks[1]),
        GalleryView::Empty => render_empty(f, app, chunks[1]),
        GalleryView::Grid => cards::render(f, app, chunks[1]),
    }

    status::render(f, app, chunks[2]);

    // Detail dialog overlays any view when open
    if app.dialog.is_some() {
        dialog::render(f, app);
    }
}

/// Render the page banner above the gallery.
fn render_header(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let lines = vec![
        Line::styled("Featured Blog Posts", app.style("header_title")),
        Line::styled(
            "Discover our latest articles and insights from industry experts",
            app.style("header_tagline"),
        ),
    ];
    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(banner, area);
}

/// Render the empty state shown when the feed yields zero posts.
fn render_empty(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled("No posts available", app.style("empty_text")),
        Line::styled("Press (r) to refresh", app.style("empty_text")),
    ];
    let msg = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(msg, area);
}
