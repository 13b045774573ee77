//! Loading placeholders.
//!
//! While a fetch is in flight the gallery shows a fixed number of
//! skeleton cards so the layout does not jump when posts arrive.

use crate::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::cards::grid_layout;

/// Number of placeholder cards shown while loading.
pub(super) const SKELETON_COUNT: usize = 6;

/// Render the skeleton grid.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let (cells, _) = grid_layout(area, SKELETON_COUNT);

    for cell in cells {
        render_placeholder(f, app, cell);
    }
}

fn render_placeholder(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let style = app.style("skeleton");
    let block = Block::default().borders(Borders::ALL).border_style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar = |len: usize| "▒".repeat(len.min(inner.width as usize));
    let lines = vec![
        Line::styled(bar(10), style),
        Line::styled(bar(24), style),
        Line::raw(""),
        Line::styled(bar(30), style),
        Line::styled(bar(28), style),
        Line::styled(bar(18), style),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
