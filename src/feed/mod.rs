//! Feed pipeline: fetch the product feed, validate it, and project it
//! into display posts.
//!
//! The module is organized into five submodules:
//!
//! - [`types`] - Raw feed records and the display projection
//! - [`transform`] - Pure RawItem → DisplayPost truncation rules
//! - [`fetcher`] - One HTTP attempt with the error taxonomy
//! - [`controller`] - Retry/backoff state machine driving attempts
//! - [`detail`] - Seeded supplementary content for the detail dialog

pub mod controller;
pub mod detail;
mod fetcher;
mod transform;
mod types;

pub use controller::{FetchConfig, FetchOutcome, PostsController, MAX_AUTO_RETRIES};
pub use detail::PostDetail;
pub use fetcher::{fetch_posts, FetchError, DEFAULT_FEED_URL};
pub use transform::{transform_feed, MAX_POSTS};
pub use types::{DisplayPost, FeedPage, RawItem};
