//! Fetch/retry controller for the post gallery.
//!
//! Owns the retry counter and the generation counter that serializes
//! attempt chains. Each activation (startup or manual retry) bumps the
//! generation and spawns a background fetch task; completions and backoff
//! timers report back through the [`AppEvent`] channel tagged with the
//! generation they were spawned under, and stale events are discarded.
//! Because tasks only hold a channel sender, nothing can mutate state
//! after the receiving loop is gone.

use crate::app::AppEvent;
use crate::feed::fetcher::{fetch_posts, FetchError};
use crate::feed::types::DisplayPost;
use std::time::Duration;
use tokio::sync::mpsc;

/// Automatic retries per attempt chain before giving up.
pub const MAX_AUTO_RETRIES: u32 = 3;

/// Timing knobs for the controller.
///
/// Tests shrink these so a full retry chain completes in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct FetchConfig {
    /// Minimum visible loading duration. An attempt resolves on the slower
    /// of the network response and this timer, purely to avoid skeleton
    /// flicker on fast responses.
    pub min_loading: Duration,
    /// Base unit for exponential backoff; attempt `n` waits `2^n` units.
    pub backoff_unit: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            min_loading: Duration::from_millis(500),
            backoff_unit: Duration::from_secs(1),
        }
    }
}

/// What a completed attempt means for the UI, decided by the controller.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Posts arrived; retry counter was reset.
    Loaded(Vec<DisplayPost>),
    /// Attempt failed and an automatic retry is scheduled.
    Retrying {
        message: String,
        delay: Duration,
        attempt: u32,
    },
    /// Attempt failed and the automatic retry budget is spent; the error
    /// stays visible until a manual retry.
    Failed { message: String },
    /// Event belonged to a superseded attempt chain; ignore it.
    Stale,
}

/// Event-driven fetch state machine: `loading → {success, error}` with up
/// to [`MAX_AUTO_RETRIES`] automatic re-entries into `loading`.
pub struct PostsController {
    client: reqwest::Client,
    feed_url: String,
    config: FetchConfig,
    events: mpsc::Sender<AppEvent>,
    retry_count: u32,
    generation: u64,
}

impl PostsController {
    pub fn new(
        client: reqwest::Client,
        feed_url: String,
        config: FetchConfig,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            client,
            feed_url,
            config,
            events,
            retry_count: 0,
            generation: 0,
        }
    }

    /// Current automatic retry count (0 after success or manual retry).
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Begins a new attempt chain. Any pending timer or in-flight fetch
    /// from an earlier chain becomes stale.
    pub fn start(&mut self) {
        self.generation += 1;
        tracing::debug!(generation = self.generation, url = %self.feed_url, "Starting fetch");
        self.spawn_fetch();
    }

    /// User-triggered retry: resets the counter and refetches immediately,
    /// regardless of how many automatic attempts preceded it.
    pub fn manual_retry(&mut self) {
        self.retry_count = 0;
        self.start();
    }

    /// Spawns one fetch attempt under the current generation. The attempt
    /// resolves on the slower of the network response and the
    /// minimum-loading timer.
    fn spawn_fetch(&self) {
        let client = self.client.clone();
        let url = self.feed_url.clone();
        let min_loading = self.config.min_loading;
        let tx = self.events.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let (result, ()) = tokio::join!(
                fetch_posts(&client, &url),
                tokio::time::sleep(min_loading)
            );
            // Receiver gone means the app was torn down; drop the result.
            let _ = tx
                .send(AppEvent::FetchFinished { generation, result })
                .await;
        });
    }

    /// Consumes a completed attempt and decides what happens next.
    ///
    /// On failure below the retry cap, increments the counter and schedules
    /// an automatic retry after `2^previous_count` backoff units (1, 2, 4
    /// units for attempts 0, 1, 2).
    pub fn handle_finished(
        &mut self,
        generation: u64,
        result: Result<Vec<DisplayPost>, FetchError>,
    ) -> FetchOutcome {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Ignoring fetch result from superseded attempt"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(posts) => {
                self.retry_count = 0;
                tracing::info!(posts = posts.len(), "Feed loaded");
                FetchOutcome::Loaded(posts)
            }
            Err(e) => {
                let message = e.to_string();
                if self.retry_count < MAX_AUTO_RETRIES {
                    let delay = self.config.backoff_unit * 2u32.pow(self.retry_count);
                    self.retry_count += 1;
                    let attempt = self.retry_count;
                    tracing::warn!(
                        error = %message,
                        attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Fetch failed, scheduling automatic retry"
                    );

                    let tx = self.events.clone();
                    let generation = self.generation;
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(AppEvent::RetryElapsed { generation }).await;
                    });

                    FetchOutcome::Retrying {
                        message,
                        delay,
                        attempt,
                    }
                } else {
                    tracing::warn!(
                        error = %message,
                        retries = MAX_AUTO_RETRIES,
                        "Fetch failed, automatic retries exhausted"
                    );
                    FetchOutcome::Failed { message }
                }
            }
        }
    }

    /// A backoff timer fired. Re-issues the fetch if the timer still
    /// belongs to the current attempt chain; returns whether it did.
    pub fn handle_retry_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Ignoring backoff timer from superseded attempt"
            );
            return false;
        }
        self.spawn_fetch();
        true
    }
}
