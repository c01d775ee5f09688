//! Detail pane: the shown feature, or a welcome screen when nothing is shown.

use crate::app::{App, Focus};
use crate::keybindings::Action as KbAction;
use crate::util::wrapped_line_count;
use crate::view::{DetailModel, Display};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Indent applied to code, output and note lines.
const INDENT: &str = "  ";

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let (title, lines) = match app.display {
        Display::Empty => (" Welcome ".to_string(), welcome_lines(app)),
        Display::Showing(record) => {
            let model = DetailModel::from_record(record);
            (format!(" {} ", model.category), detail_lines(app, &model))
        }
    };

    // Keep the scroll offset inside the wrapped content for this viewport
    let inner_width = usize::from(area.width.saturating_sub(2));
    let visible = usize::from(area.height.saturating_sub(2));
    let total: usize = lines
        .iter()
        .map(|line| wrapped_line_count(line, inner_width))
        .sum();
    app.detail_visible_lines = visible;
    app.detail_max_scroll = total.saturating_sub(visible);
    app.detail_scroll = app.detail_scroll.min(app.detail_max_scroll);

    let border_style = if app.focus == Focus::Detail && !app.search_mode {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let scroll = u16::try_from(app.detail_scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .style(app.style("detail_body"))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

/// Lines for a shown feature.
///
/// The output panel appears only when the record has output, and the notes
/// list only when it has at least one note.
fn detail_lines(app: &App, model: &DetailModel<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            model.title.to_string(),
            app.style("detail_title"),
        )),
        Line::from(Span::styled(
            model.category.to_string(),
            app.style("detail_category"),
        )),
        Line::from(""),
    ];

    for paragraph in model.description.lines() {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            app.style("detail_body"),
        )));
    }
    lines.push(Line::from(""));

    let copy_style = if app.copy_acknowledged() {
        app.style("copy_done")
    } else {
        app.style("copy_label")
    };
    lines.push(Line::from(vec![
        Span::styled("Example", app.style("detail_section")),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.copy_label()), copy_style),
    ]));

    match app.highlighted_code() {
        Some(code) => {
            for line in code {
                let mut spans = Vec::with_capacity(line.spans.len() + 1);
                spans.push(Span::styled(INDENT, app.style("code_block")));
                spans.extend(line.spans.iter().cloned());
                lines.push(Line::from(spans));
            }
        }
        None => {
            for line in model.code.lines() {
                lines.push(Line::from(Span::styled(
                    format!("{INDENT}{line}"),
                    app.style("code_block"),
                )));
            }
        }
    }

    if let Some(output) = model.output {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Output", app.style("detail_section"))));
        for line in output.lines() {
            lines.push(Line::from(Span::styled(
                format!("{INDENT}{line}"),
                app.style("output_block"),
            )));
        }
    }

    if model.show_notes() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Notes", app.style("detail_section"))));
        for (i, note) in model.notes.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{INDENT}{}. ", i + 1), app.style("note_marker")),
                Span::styled(note.to_string(), app.style("detail_body")),
            ]));
        }
    }

    lines
}

/// Lines for the welcome screen, including catalog counts.
fn welcome_lines(app: &App) -> Vec<Line<'static>> {
    let hint = |action, fallback: &str| {
        app.keybindings
            .key_hint(action)
            .unwrap_or_else(|| fallback.to_string())
    };

    vec![
        Line::from(Span::styled(
            "JavaScript Feature Reference",
            app.style("welcome_heading"),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pick a feature from the list to see what it does, an example, and its output.",
            app.style("welcome_body"),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(app.stats.total.to_string(), app.style("welcome_stat")),
            Span::styled(" features in ", app.style("welcome_body")),
            Span::styled(app.stats.categories.to_string(), app.style("welcome_stat")),
            Span::styled(" categories", app.style("welcome_body")),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} search   {} show   {} copy   {} theme   {} help",
                hint(KbAction::EnterSearch, "/"),
                hint(KbAction::Select, "Enter"),
                hint(KbAction::CopyCode, "c"),
                hint(KbAction::ToggleTheme, "t"),
                hint(KbAction::ShowHelp, "?"),
            ),
            app.style("welcome_body"),
        )),
    ]
}
