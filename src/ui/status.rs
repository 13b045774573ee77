use crate::app::{App, GalleryView};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Transient messages take precedence over the static key hints
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_str())
    } else if app.dialog.is_some() {
        Cow::Borrowed("[Esc]close [q]uit")
    } else {
        match app.fetch.view() {
            GalleryView::Loading => Cow::Borrowed("Loading posts..."),
            GalleryView::Error => Cow::Borrowed("[r]etry [t]heme [q]uit"),
            GalleryView::Empty => Cow::Borrowed("[r]efresh [t]heme [q]uit"),
            GalleryView::Grid => {
                Cow::Borrowed("[←↓↑→/hjkl]select [Enter]details [r]efresh [t]heme [q]uit")
            }
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
