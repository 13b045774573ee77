//! Error panel.
//!
//! Shown whenever the fetch state carries an error: during backoff waits
//! between automatic retries, and terminally once the retry budget is
//! spent.

use crate::app::App;
use crate::feed::MAX_AUTO_RETRIES;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the centered error panel.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let message = app.fetch.error.as_deref().unwrap_or("Unknown error");

    let hint = if app.fetch.retry_count >= MAX_AUTO_RETRIES {
        "Automatic retries exhausted.".to_string()
    } else {
        format!(
            "Retrying automatically (attempt {}/{})...",
            app.fetch.retry_count, MAX_AUTO_RETRIES
        )
    };

    let lines = vec![
        Line::raw(""),
        Line::styled("Oops! Something went wrong", app.style("error_text")),
        Line::raw(""),
        Line::styled(message.to_string(), app.style("error_text")),
        Line::raw(""),
        Line::styled(hint, app.style("error_hint")),
        Line::styled("Press (r) to retry now", app.style("error_hint")),
    ];

    let width = 56u16.min(area.width.saturating_sub(2));
    let height = 11u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let panel = Rect::new(x, y, width, height);

    if panel.width < 10 || panel.height < 5 {
        return;
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("error_text"))
                .title(" Error "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, panel);
}
