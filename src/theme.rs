//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants. The persisted preference is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a stored variant name. Only the exact lowercase names match.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Value written to the preference store.
    pub fn as_pref_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Flip to the other variant: Dark → Light → Dark.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Toggle icon: shows the mode the button switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Feature list --
    pub list_header: Style,
    pub list_item: Style,
    pub list_cursor: Style,
    pub list_active: Style,
    pub list_empty: Style,

    // -- Search box --
    pub search_input: Style,
    pub search_placeholder: Style,

    // -- Detail pane --
    pub detail_title: Style,
    pub detail_category: Style,
    pub detail_body: Style,
    pub detail_section: Style,
    pub code_block: Style,
    pub output_block: Style,
    pub note_marker: Style,
    pub copy_label: Style,
    pub copy_done: Style,

    // -- Welcome --
    pub welcome_heading: Style,
    pub welcome_body: Style,
    pub welcome_stat: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            list_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default(),
            list_cursor: Style::default().bg(Color::DarkGray).fg(Color::White),
            list_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            list_empty: Style::default().fg(Color::DarkGray),

            search_input: Style::default().fg(Color::White),
            search_placeholder: Style::default().fg(Color::DarkGray),

            detail_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_category: Style::default().fg(Color::Magenta),
            detail_body: Style::default(),
            detail_section: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            code_block: Style::default().fg(Color::Yellow).bg(Color::Black),
            output_block: Style::default().fg(Color::Green),
            note_marker: Style::default().fg(Color::Cyan),
            copy_label: Style::default().fg(Color::DarkGray),
            copy_done: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),

            welcome_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            welcome_body: Style::default(),
            welcome_stat: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            list_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(Color::Black),
            list_cursor: Style::default().bg(Color::Blue).fg(Color::White),
            list_active: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            list_empty: Style::default().fg(Color::DarkGray),

            search_input: Style::default().fg(Color::Black),
            search_placeholder: Style::default().fg(Color::Gray),

            detail_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_category: Style::default().fg(Color::Magenta),
            detail_body: Style::default().fg(Color::Black),
            detail_section: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            code_block: Style::default().fg(Color::DarkGray).bg(Color::White),
            output_block: Style::default().fg(Color::Green),
            note_marker: Style::default().fg(Color::Blue),
            copy_label: Style::default().fg(Color::DarkGray),
            copy_done: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),

            welcome_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            welcome_body: Style::default().fg(Color::Black),
            welcome_stat: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 22] = [
    "list_header",
    "list_item",
    "list_cursor",
    "list_active",
    "list_empty",
    "search_input",
    "search_placeholder",
    "detail_title",
    "detail_category",
    "detail_body",
    "detail_section",
    "code_block",
    "output_block",
    "note_marker",
    "copy_label",
    "copy_done",
    "welcome_heading",
    "welcome_body",
    "welcome_stat",
    "status_bar",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 22] = [
            p.list_header,
            p.list_item,
            p.list_cursor,
            p.list_active,
            p.list_empty,
            p.search_input,
            p.search_placeholder,
            p.detail_title,
            p.detail_category,
            p.detail_body,
            p.detail_section,
            p.code_block,
            p.output_block,
            p.note_marker,
            p.copy_label,
            p.copy_done,
            p.welcome_heading,
            p.welcome_body,
            p.welcome_stat,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
