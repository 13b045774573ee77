//! Application event handling.
//!
//! Applies fetch completions and backoff timer events to the app state.
//! The controller decides what each event means (loaded, retrying, failed,
//! stale); this module translates that outcome into `FetchState` changes
//! and status messages.

use crate::app::{App, AppEvent};
use crate::feed::{FetchOutcome, MAX_AUTO_RETRIES};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FetchFinished { generation, result } => {
            match app.controller.handle_finished(generation, result) {
                FetchOutcome::Loaded(posts) => {
                    app.fetch.posts = posts;
                    app.fetch.loading = false;
                    app.fetch.error = None;
                    app.fetch.retry_count = 0;
                    app.clamp_selection();
                    app.set_status(format!("Loaded {} posts", app.fetch.posts.len()));
                }
                FetchOutcome::Retrying {
                    message,
                    delay,
                    attempt,
                } => {
                    app.fetch.loading = false;
                    app.fetch.error = Some(message);
                    app.fetch.retry_count = attempt;
                    app.set_status(format!(
                        "Retrying in {}s (attempt {}/{})",
                        delay.as_secs_f64().ceil() as u64,
                        attempt,
                        MAX_AUTO_RETRIES
                    ));
                }
                FetchOutcome::Failed { message } => {
                    app.fetch.loading = false;
                    app.fetch.error = Some(message);
                    app.set_status("Fetch failed - press r to retry");
                }
                FetchOutcome::Stale => {}
            }
        }
        AppEvent::RetryElapsed { generation } => {
            if app.controller.handle_retry_elapsed(generation) {
                // Re-entering loading keeps the retry count for display.
                let attempt = app.controller.retry_count();
                app.fetch.begin_loading(attempt);
            }
        }
    }
}
