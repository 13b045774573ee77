//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler. The detail dialog captures all keys while it is open.

use crate::app::{App, GalleryView};
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Ctrl+C always quits
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Dialog captures all keys when open
    if app.dialog.is_some() {
        return handle_dialog_input(app, code);
    }

    handle_gallery_input(app, code)
}

/// Handle input while the detail dialog is visible.
fn handle_dialog_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_dialog(),
        _ => {}
    }
    Action::Continue
}

/// Handle input for the gallery views.
fn handle_gallery_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,

        KeyCode::Char('r') => {
            app.controller.manual_retry();
            app.fetch.begin_loading(0);
            app.set_status("Refreshing posts...");
        }

        KeyCode::Char('t') => app.cycle_theme(),

        // Grid navigation only applies while posts are shown
        _ if app.fetch.view() == GalleryView::Grid => {
            let columns = app.grid_columns.max(1) as isize;
            match code {
                KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
                KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
                KeyCode::Up | KeyCode::Char('k') => app.move_selection(-columns),
                KeyCode::Down | KeyCode::Char('j') => app.move_selection(columns),
                KeyCode::Home | KeyCode::Char('g') => app.selected = 0,
                KeyCode::End | KeyCode::Char('G') => {
                    app.selected = app.fetch.posts.len().saturating_sub(1)
                }
                KeyCode::Enter | KeyCode::Char(' ') => app.open_dialog(),
                _ => {}
            }
        }

        _ => {}
    }
    Action::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::feed::{DisplayPost, FetchConfig, PostsController};
    use crate::theme::ThemeVariant;

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

    fn app_with_posts(n: i64) -> App {
        let (tx, _rx) = tokio::sync::mpsc::channel(8);
        let controller = PostsController::new(
            reqwest::Client::new(),
            "http://localhost:9/products".to_string(),
            FetchConfig::default(),
            tx,
        );
        let mut app = App::new(controller, ThemeVariant::Dark);
        app.fetch.posts = (0..n).map(post).collect();
        app
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app_with_posts(1);
        assert!(matches!(
            handle_input(&mut app, KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit
        ));
        assert!(matches!(
            handle_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        ));
    }

    #[tokio::test]
    async fn test_vertical_navigation_uses_grid_columns() {
        let mut app = app_with_posts(9);
        app.grid_columns = 3;
        handle_input(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.selected, 3);
        handle_input(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.selected, 4);
        handle_input(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_enter_opens_and_esc_closes_dialog() {
        let mut app = app_with_posts(2);
        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.dialog.is_some());

        // Navigation is captured while the dialog is open
        handle_input(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.selected, 0);

        handle_input(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.dialog.is_none());
    }

    #[tokio::test]
    async fn test_manual_retry_resets_state() {
        let mut app = app_with_posts(0);
        app.fetch.loading = false;
        app.fetch.error = Some("HTTP error! status: 500".to_string());
        app.fetch.retry_count = 3;

        handle_input(&mut app, KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(app.fetch.loading);
        assert!(app.fetch.error.is_none());
        assert_eq!(app.fetch.retry_count, 0);
        assert_eq!(app.controller.retry_count(), 0);
    }

    #[tokio::test]
    async fn test_navigation_ignored_while_not_grid() {
        let mut app = app_with_posts(3);
        app.fetch.loading = true;
        handle_input(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.selected, 0);
        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.dialog.is_none());
    }
}
