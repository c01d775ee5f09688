use crate::app::{App, Focus};
use crate::util::display_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar: message or key hints on the left, theme and
/// catalog counts on the right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Status bar needs at least 1 char width to be meaningful
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed status messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(&**msg)
    } else if app.search_mode {
        Cow::Borrowed("Type to search | ESC clear | ENTER keep")
    } else {
        match app.focus {
            Focus::List => Cow::Borrowed(
                "[/]search [Enter]show [c]opy [t]heme [Tab]detail [?]help [q]uit",
            ),
            Focus::Detail => {
                Cow::Borrowed("[j/k]scroll [Ctrl+d/u]page [c]opy [t]heme [Esc]back [q]uit")
            }
        }
    };

    let summary = format!(
        " {} {}/{} features | {} categories ",
        app.theme_variant.icon(),
        app.view.len(),
        app.stats.total,
        app.stats.categories
    );

    let style = app.style("status_bar");
    let summary_width = u16::try_from(display_width(&summary)).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(summary_width)])
        .split(area);

    f.render_widget(Paragraph::new(text).style(style), chunks[0]);
    f.render_widget(Paragraph::new(summary).style(style), chunks[1]);
}
