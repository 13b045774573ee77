//! Terminal User Interface module.
//!
//! This module provides the TUI for the post gallery, including:
//! - Main event loop (`run`)
//! - Input handling for the grid and the detail dialog
//! - Rendering for the card grid, skeletons, error panel, and empty state
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - View dispatch, header, and dialog overlay
//! - `cards` - Card grid widget
//! - `skeleton` - Loading placeholders
//! - `error` - Error panel
//! - `dialog` - Detail dialog overlay
//! - `status` - Status bar widget

mod cards;
mod dialog;
mod error;
mod events;
mod input;
mod loop_runner;
mod render;
mod skeleton;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
