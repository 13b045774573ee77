//! Detail dialog overlay.
//!
//! Shows the selected post with its synthesized supplementary fields
//! (publish date, views, tags, reading time). Rendered centered on top of
//! the current view with a cleared background.

use crate::app::App;
use crate::util::{fit_to_width, sanitize};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::cards::render_stars;

/// Render the detail dialog overlay centered on screen.
pub(super) fn render(f: &mut Frame, app: &App) {
    let dialog = match &app.dialog {
        Some(d) => d,
        None => return,
    };
    let area = f.area();

    let width = 72u16.min(area.width.saturating_sub(4));
    let height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 24 || overlay.height < 8 {
        return;
    }

    f.render_widget(Clear, overlay);

    let post = &dialog.post;
    let detail = &dialog.detail;
    let inner_width = overlay.width.saturating_sub(2) as usize;

    // The card title keeps the truncation ellipsis; the dialog drops it.
    let title = sanitize(post.title.trim_end_matches("..."));
    let category = sanitize(&post.category);
    let brand = sanitize(&post.brand);
    let description = sanitize(&detail.full_description);

    let mut lines = vec![
        Line::styled(
            fit_to_width(&title, inner_width).into_owned(),
            app.style("dialog_title"),
        ),
        Line::styled(
            format!("{} ({:.1})", render_stars(post.rating), post.rating),
            app.style("card_rating"),
        ),
        Line::raw(""),
        metadata_line(app, "Author", &brand),
        metadata_line(app, "Published", &detail.published),
        metadata_line(app, "Views", &detail.views),
        metadata_line(app, "Article ID", &format!("#{}", post.id)),
        metadata_line(app, "Reading time", &detail.read_time),
        Line::raw(""),
        Line::from(
            detail
                .tags
                .iter()
                .map(|t| Span::styled(format!("[{}] ", t), app.style("dialog_tag")))
                .collect::<Vec<_>>(),
        ),
        Line::raw(""),
    ];
    for paragraph in description.split('\n') {
        lines.push(Line::styled(
            paragraph.to_string(),
            app.style("dialog_body"),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("dialog_border"))
                .title(Line::styled(
                    format!(" {} ", category),
                    app.style("card_category"),
                ))
                .title_bottom(" (Esc) Close "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, overlay);
}

fn metadata_line<'a>(app: &App, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), app.style("dialog_metadata")),
        Span::styled(value.to_string(), app.style("dialog_body")),
    ])
}
