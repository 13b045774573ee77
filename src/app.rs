//! Application state for the gallery TUI.
//!
//! `App` is the single logical writer over all mutable state. Background
//! tasks never touch it directly; they send [`AppEvent`]s which the event
//! loop applies on its own thread of control.

use crate::feed::{self, DisplayPost, PostDetail, PostsController};
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use tokio::time::Instant;

/// How long transient status messages stay visible.
const STATUS_DURATION_SECS: u64 = 4;

// ============================================================================
// Fetch State
// ============================================================================

/// Published output of the fetch/retry controller, consumed by rendering.
#[derive(Debug, Default)]
pub struct FetchState {
    /// Display posts in feed order, at most ten.
    pub posts: Vec<DisplayPost>,
    /// Whether an attempt is currently in flight.
    pub loading: bool,
    /// Display message of the last failure, if any.
    pub error: Option<String>,
    /// Automatic retry count for the current attempt chain.
    pub retry_count: u32,
}

impl FetchState {
    /// Marks the start of a fetch attempt: loading shown, prior error
    /// cleared.
    pub fn begin_loading(&mut self, retry_count: u32) {
        self.loading = true;
        self.error = None;
        self.retry_count = retry_count;
    }

    /// Projects the state onto exactly one visible view. The order
    /// encodes the invariant: loading wins, then error, then empty.
    pub fn view(&self) -> GalleryView {
        if self.loading {
            GalleryView::Loading
        } else if self.error.is_some() {
            GalleryView::Error
        } else if self.posts.is_empty() {
            GalleryView::Empty
        } else {
            GalleryView::Grid
        }
    }
}

/// The four mutually exclusive gallery views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryView {
    Loading,
    Error,
    Empty,
    Grid,
}

// ============================================================================
// Events
// ============================================================================

/// Events sent by background tasks to the UI loop.
///
/// Every event carries the controller generation it was spawned under so
/// results of superseded attempt chains can be discarded.
#[derive(Debug)]
pub enum AppEvent {
    /// A fetch attempt (network + minimum-loading timer) completed.
    FetchFinished {
        generation: u64,
        result: Result<Vec<DisplayPost>, feed::FetchError>,
    },
    /// A scheduled backoff delay elapsed.
    RetryElapsed { generation: u64 },
}

// ============================================================================
// Dialog
// ============================================================================

/// An open detail dialog: the post it shows plus its synthesized
/// supplementary content. Regenerated (from the same seed) on each open.
pub struct DialogState {
    pub post: DisplayPost,
    pub detail: PostDetail,
}

// ============================================================================
// App
// ============================================================================

/// Top-level application state.
pub struct App {
    /// Fetch/retry controller; owns the retry and generation counters.
    pub controller: PostsController,
    /// Published fetch output driving the view.
    pub fetch: FetchState,
    /// Index of the selected card in the grid.
    pub selected: usize,
    /// Column count of the last rendered grid; used for vertical movement.
    pub grid_columns: usize,
    /// Open detail dialog, if any.
    pub dialog: Option<DialogState>,
    /// Current theme and resolved styles.
    pub theme: ThemeVariant,
    styles: StyleMap,
    /// Transient status bar message with its creation time.
    pub status_message: Option<(String, Instant)>,
    /// Set whenever state changed and the next loop iteration must draw.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(controller: PostsController, theme: ThemeVariant) -> Self {
        Self {
            controller,
            fetch: FetchState::default(),
            selected: 0,
            grid_columns: 1,
            dialog: None,
            theme,
            styles: StyleMap::from_palette(&theme.palette()),
            status_message: None,
            needs_redraw: true,
        }
    }

    /// Resolve a semantic style role for the current theme.
    pub fn style(&self, role: &str) -> Style {
        self.styles.resolve(role)
    }

    /// Switch to the next theme variant and rebuild the style map.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.styles = StyleMap::from_palette(&self.theme.palette());
        self.set_status(format!("Theme: {}", self.theme.name()));
    }

    /// Show a transient status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been visible long enough.
    /// Returns true when a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, created)) = &self.status_message {
            if created.elapsed().as_secs() >= STATUS_DURATION_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Move the grid selection by a signed card offset, clamped to the
    /// post list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.fetch.posts.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.fetch.posts.len() - 1;
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, last as isize) as usize;
    }

    /// Keep the selection valid after the post list changed.
    pub fn clamp_selection(&mut self) {
        if self.fetch.posts.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.fetch.posts.len() {
            self.selected = self.fetch.posts.len() - 1;
        }
    }

    /// Open the detail dialog for the selected post.
    pub fn open_dialog(&mut self) {
        if let Some(post) = self.fetch.posts.get(self.selected) {
            self.dialog = Some(DialogState {
                post: post.clone(),
                detail: feed::detail::generate(post),
            });
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> DisplayPost {
        DisplayPost {
            id,
            title: format!("Post {}", id),
            description: "d".to_string(),
            image_url: String::new(),
            category: "c".to_string(),
            brand: "b".to_string(),
            rating: 4.0,
        }
    }

    #[test]
    fn test_view_projection_is_exclusive() {
        let mut state = FetchState::default();

        state.begin_loading(0);
        assert_eq!(state.view(), GalleryView::Loading);

        // Loading wins even with stale posts or error present
        state.posts = vec![post(1)];
        state.error = Some("boom".to_string());
        assert_eq!(state.view(), GalleryView::Loading);

        state.loading = false;
        assert_eq!(state.view(), GalleryView::Error);

        state.error = None;
        assert_eq!(state.view(), GalleryView::Grid);

        state.posts.clear();
        assert_eq!(state.view(), GalleryView::Empty);
    }

    #[test]
    fn test_begin_loading_clears_error() {
        let mut state = FetchState {
            error: Some("old".to_string()),
            ..Default::default()
        };
        state.begin_loading(2);
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.retry_count, 2);
    }

    fn test_app() -> App {
        let (tx, _rx) = tokio::sync::mpsc::channel(8);
        let controller = PostsController::new(
            reqwest::Client::new(),
            "http://localhost:9/products".to_string(),
            feed::FetchConfig::default(),
            tx,
        );
        App::new(controller, ThemeVariant::Dark)
    }

    #[tokio::test]
    async fn test_selection_clamped_to_posts() {
        let mut app = test_app();
        app.fetch.posts = vec![post(1), post(2), post(3)];

        app.move_selection(5);
        assert_eq!(app.selected, 2);
        app.move_selection(-10);
        assert_eq!(app.selected, 0);

        app.selected = 2;
        app.fetch.posts.truncate(1);
        app.clamp_selection();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_dialog_opens_for_selected_post_only() {
        let mut app = test_app();
        app.open_dialog();
        assert!(app.dialog.is_none());

        app.fetch.posts = vec![post(7)];
        app.open_dialog();
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.post.id, 7);

        app.close_dialog();
        assert!(app.dialog.is_none());
    }

    #[tokio::test]
    async fn test_dialog_detail_is_stable_across_reopens() {
        let mut app = test_app();
        app.fetch.posts = vec![post(7)];
        app.open_dialog();
        let first = app.dialog.take().unwrap().detail;
        app.open_dialog();
        assert_eq!(first, app.dialog.as_ref().unwrap().detail);
    }
}
