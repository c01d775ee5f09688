//! Syntax highlighting for example code.
//!
//! The highlighter is a collaborator: it takes plain text, a language tag and
//! the active style sheet and returns freshly styled lines. Every call starts
//! from scratch, so callers restyle by discarding the previous result and
//! highlighting again.

use crate::theme::ThemeVariant;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Styles example code.
pub trait Highlighter: Send + Sync {
    /// Highlight `code` written in `language` with the style sheet for `variant`.
    fn highlight(&self, code: &str, language: &str, variant: ThemeVariant) -> Vec<Line<'static>>;
}

/// Styled code for one record under one style sheet.
///
/// Tagged with the record id and variant it was produced for so a stale
/// result is never drawn for a different record or theme.
#[derive(Debug, Clone)]
pub struct HighlightedCode {
    pub feature_id: &'static str,
    pub variant: ThemeVariant,
    pub lines: Vec<Line<'static>>,
}

impl HighlightedCode {
    pub fn is_for(&self, feature_id: &str, variant: ThemeVariant) -> bool {
        self.feature_id == feature_id && self.variant == variant
    }
}

// ============================================================================
// Plain
// ============================================================================

/// Unstyled highlighter: one raw span per source line.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: &str, _variant: ThemeVariant) -> Vec<Line<'static>> {
        plain_lines(code)
    }
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    code.lines().map(|l| Line::from(l.to_string())).collect()
}

// ============================================================================
// Syntect
// ============================================================================

struct SyntaxAssets {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

static ASSETS: OnceLock<SyntaxAssets> = OnceLock::new();

fn assets() -> &'static SyntaxAssets {
    ASSETS.get_or_init(|| SyntaxAssets {
        syntaxes: SyntaxSet::load_defaults_newlines(),
        themes: ThemeSet::load_defaults(),
    })
}

/// Highlighter backed by syntect's bundled syntaxes and themes.
#[derive(Debug, Clone)]
pub struct SyntectHighlighter {
    dark_theme: String,
    light_theme: String,
}

impl SyntectHighlighter {
    pub fn new(dark_theme: impl Into<String>, light_theme: impl Into<String>) -> Self {
        let highlighter = Self {
            dark_theme: dark_theme.into(),
            light_theme: light_theme.into(),
        };
        for name in [&highlighter.dark_theme, &highlighter.light_theme] {
            if !assets().themes.themes.contains_key(name.as_str()) {
                tracing::warn!(theme = %name, "Unknown syntax theme, using first bundled theme");
            }
        }
        highlighter
    }

    fn theme(&self, variant: ThemeVariant) -> Option<&'static Theme> {
        let name = match variant {
            ThemeVariant::Dark => &self.dark_theme,
            ThemeVariant::Light => &self.light_theme,
        };
        let themes = &assets().themes.themes;
        themes.get(name.as_str()).or_else(|| themes.values().next())
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: &str, variant: ThemeVariant) -> Vec<Line<'static>> {
        let assets = assets();
        let Some(theme) = self.theme(variant) else {
            return plain_lines(code);
        };
        let syntax = assets
            .syntaxes
            .find_syntax_by_token(language)
            .unwrap_or_else(|| assets.syntaxes.find_syntax_plain_text());

        let mut h = HighlightLines::new(syntax, theme);
        let mut lines = Vec::with_capacity(code.lines().count());
        for line in LinesWithEndings::from(code) {
            let ranges = match h.highlight_line(line, &assets.syntaxes) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(error = %e, language, "Highlighting failed, showing plain text");
                    return plain_lines(code);
                }
            };
            let spans: Vec<Span<'static>> = ranges
                .into_iter()
                .filter_map(|(style, text)| {
                    let text = text.trim_end_matches(['\n', '\r']);
                    (!text.is_empty()).then(|| Span::styled(text.to_string(), convert_style(style)))
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }
}

fn convert_style(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}
