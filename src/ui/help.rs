//! Help overlay listing every active keybinding.
//!
//! Keys that trigger the same action in one context share a line, so the
//! overlay reads as a list of actions rather than a list of keys. User
//! overrides from config show up because the sections are built from the
//! live registry.

use crate::app::App;
use crate::keybindings::{Action, Context, KeybindingRegistry};
use crate::util::display_width;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTION_ORDER: [Context; 4] = [
    Context::Global,
    Context::FeatureList,
    Context::Detail,
    Context::Search,
];

/// Separator between keys bound to the same action.
const KEY_JOINER: &str = " / ";

/// One action and every key that triggers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct HelpEntry {
    pub keys: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct HelpSection {
    pub context: Context,
    pub entries: Vec<HelpEntry>,
}

/// Group the registry's bindings into per-context sections.
///
/// Entries keep the order in which their first key was bound. Contexts with
/// no bindings are left out.
pub(super) fn help_sections(registry: &KeybindingRegistry) -> Vec<HelpSection> {
    let bindings = registry.all_bindings();

    SECTION_ORDER
        .into_iter()
        .filter_map(|context| {
            let mut grouped: Vec<(Action, Vec<String>, &'static str)> = Vec::new();
            for (_, key, action, description) in bindings.iter().filter(|b| b.0 == context) {
                match grouped.iter_mut().find(|(a, _, _)| *a == *action) {
                    Some((_, keys, _)) => keys.push(key.clone()),
                    None => grouped.push((*action, vec![key.clone()], *description)),
                }
            }
            if grouped.is_empty() {
                return None;
            }
            let entries = grouped
                .into_iter()
                .map(|(_, keys, description)| HelpEntry {
                    keys: keys.join(KEY_JOINER),
                    description,
                })
                .collect();
            Some(HelpSection { context, entries })
        })
        .collect()
}

/// Flatten sections into display lines with the key column padded to `key_width`.
fn section_lines(app: &App, sections: &[HelpSection], key_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(
                section.context.label(),
                app.style("detail_section").add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", section.entries.len()),
                app.style("detail_category"),
            ),
        ]));
        for entry in &section.entries {
            let pad = key_width.saturating_sub(display_width(&entry.keys));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}{}  ", entry.keys, " ".repeat(pad)),
                    app.style("code_block"),
                ),
                Span::styled(entry.description, app.style("detail_body")),
            ]));
        }
    }
    lines
}

/// Render the help overlay over whatever is already drawn.
pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(80, 80, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }
    f.render_widget(Clear, overlay);

    let sections = help_sections(&app.keybindings);
    let key_width = sections
        .iter()
        .flat_map(|s| s.entries.iter())
        .map(|e| display_width(&e.keys))
        .max()
        .unwrap_or(0);
    let lines = section_lines(app, &sections, key_width);

    // Two border rows plus the footer row
    let body_height = usize::from(overlay.height.saturating_sub(3));
    let max_scroll = lines.len().saturating_sub(body_height);
    let scroll = app.help_scroll_offset.min(max_scroll);

    let close_key = app
        .keybindings
        .key_hint(Action::ShowHelp)
        .unwrap_or_else(|| "?".to_string());
    let title = if max_scroll > 0 {
        format!(" Keys {}/{} ", scroll + 1, max_scroll + 1)
    } else {
        " Keys ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(title);
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let body = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let offset = u16::try_from(scroll).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), body);

    let footer_text = if max_scroll > 0 {
        format!("j/k scroll · {close_key} or Esc close")
    } else {
        format!("{close_key} or Esc close")
    };
    let footer = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer_text,
            app.style("detail_category").add_modifier(Modifier::ITALIC),
        ))),
        footer,
    );
}

/// Center a rectangle covering the given percentages of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
