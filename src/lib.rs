//! jsref: a terminal reference browser for JavaScript language features.
//!
//! The crate is split into a pure core (catalog, query, view models) and the
//! stateful pieces around it (app controller, preferences, terminal UI).

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod highlight;
pub mod keybindings;
pub mod preferences;
pub mod query;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod util;
pub mod view;
