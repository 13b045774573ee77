//! Card grid widget.
//!
//! Lays the posts out as a responsive grid of bordered cards. The column
//! count follows the terminal width; vertical navigation in the input
//! layer reads it back from `app.grid_columns`.

use crate::app::App;
use crate::feed::DisplayPost;
use crate::util::{fit_to_width, sanitize};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Preferred card width in columns; the grid fits as many as possible.
const CARD_WIDTH: u16 = 36;
/// Fixed card height including borders.
pub(super) const CARD_HEIGHT: u16 = 9;
/// Upper bound on grid columns regardless of terminal width.
const MAX_COLUMNS: usize = 4;

/// Split `area` into per-card rects for `count` cards, row-major.
/// Returns the rects and the column count used.
pub(super) fn grid_layout(area: Rect, count: usize) -> (Vec<Rect>, usize) {
    let columns = ((area.width / CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS);
    let rows = count.div_ceil(columns);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);

    let mut cells = Vec::with_capacity(count);
    let row_constraints: Vec<Constraint> = (0..rows.min(visible_rows))
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for row_area in row_areas.iter() {
        let col_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        for col_area in col_areas.iter() {
            if cells.len() < count {
                cells.push(*col_area);
            }
        }
    }

    (cells, columns)
}

/// Render the card grid, scrolled so the selected card stays visible.
pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let columns = ((area.width / CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS);
    app.grid_columns = columns;

    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let selected_row = app.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let skip = first_row * columns;

    let visible = &app.fetch.posts[skip.min(app.fetch.posts.len())..];
    let (cells, _) = grid_layout(area, visible.len());

    for (idx, (post, cell)) in visible.iter().zip(cells.iter()).enumerate() {
        render_card(f, app, post, *cell, idx + skip == app.selected);
    }
}

/// Render one post card.
fn render_card(f: &mut Frame, app: &App, post: &DisplayPost, area: Rect, selected: bool) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let border_style = if selected {
        app.style("card_border_selected")
    } else {
        app.style("card_border")
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let category = sanitize(&post.category);
    let brand = sanitize(&post.brand);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::styled(
            format!(" {} ", fit_to_width(&category, inner_width.saturating_sub(2))),
            app.style("card_category"),
        ))
        .title_bottom(Line::styled(
            format!(" By {} · #{} ", fit_to_width(&brand, 16), post.id),
            app.style("card_brand"),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = sanitize(&post.title);
    let description = sanitize(&post.description);

    let lines = vec![
        Line::styled(
            format!("{} ({:.1})", render_stars(post.rating), post.rating),
            app.style("card_rating"),
        ),
        Line::styled(
            fit_to_width(&title, inner_width).into_owned(),
            app.style("card_title"),
        ),
        Line::raw(""),
        Line::styled(description.into_owned(), app.style("card_description")),
    ];

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(body, inner);
}

/// Render a 0–5 rating as stars: full stars, an optional half star, then
/// empty stars padding to five.
pub(super) fn render_stars(rating: f64) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    let half = clamped.fract() > f64::EPSILON;

    let mut out = String::new();
    for _ in 0..full {
        out.push('★');
    }
    if half {
        out.push('⯨');
    }
    while out.chars().count() < 5 {
        out.push('☆');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(5.0), "★★★★★");
        assert_eq!(render_stars(4.5), "★★★★⯨");
        assert_eq!(render_stars(3.0), "★★★☆☆");
        assert_eq!(render_stars(0.0), "☆☆☆☆☆");
        // Out-of-range input is clamped, never panics
        assert_eq!(render_stars(7.3), "★★★★★");
        assert_eq!(render_stars(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_grid_layout_columns_follow_width() {
        let narrow = Rect::new(0, 0, 40, 30);
        let (_, columns) = grid_layout(narrow, 10);
        assert_eq!(columns, 1);

        let wide = Rect::new(0, 0, 120, 30);
        let (_, columns) = grid_layout(wide, 10);
        assert_eq!(columns, 3);

        let very_wide = Rect::new(0, 0, 400, 30);
        let (_, columns) = grid_layout(very_wide, 10);
        assert_eq!(columns, MAX_COLUMNS);
    }

    #[test]
    fn test_grid_layout_cell_count_capped_by_posts() {
        let area = Rect::new(0, 0, 120, 40);
        let (cells, _) = grid_layout(area, 4);
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_grid_layout_clips_to_visible_rows() {
        // One row of height fits, three columns wide: at most 3 cells
        let area = Rect::new(0, 0, 120, CARD_HEIGHT);
        let (cells, columns) = grid_layout(area, 10);
        assert_eq!(columns, 3);
        assert_eq!(cells.len(), 3);
    }
}
