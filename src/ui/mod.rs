//! Terminal User Interface module.
//!
//! This module provides the TUI for the feature browser, including:
//! - Main event loop (`run`)
//! - Input handling for list, detail, and search modes
//! - Rendering for the sidebar, detail pane, and overlays
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard and mouse input handling
//! - `events` - Background task event processing
//! - `render` - Layout and overlay dispatch
//! - `helpers` - Shared utility functions
//! - `sidebar` - Search box and grouped feature list
//! - `detail` - Feature detail pane and welcome screen
//! - `status` - Status bar widget
//! - `help` - Keybinding overlay

mod detail;
mod events;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod sidebar;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
