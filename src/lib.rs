//! glance — a terminal gallery that renders a product feed as a grid of
//! blog-post cards.
//!
//! The crate is split into the feed pipeline (fetch, validate, transform,
//! retry) and the TUI that consumes its published [`app::FetchState`].

pub mod app;
pub mod config;
pub mod feed;
pub mod theme;
pub mod ui;
pub mod util;
