//! Shared text utilities for terminal rendering.
//!
//! Everything the UI shows from the feed passes through [`sanitize`]
//! (control-character stripping) and, where space is tight, through
//! [`fit_to_width`] (Unicode-aware column truncation).

mod text;

pub use text::{display_width, fit_to_width, sanitize};
