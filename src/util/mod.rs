//! Text measurement helpers for terminal rendering.
//!
//! Widths are in terminal columns, not bytes or chars, so CJK text and emoji
//! line up with ratatui's own layout.

mod text;

pub use text::{display_width, truncate_to_width, wrapped_line_count};
