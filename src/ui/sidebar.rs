//! Sidebar: search box above the grouped feature list.

use crate::app::{App, Focus};
use crate::util::truncate_to_width;
use crate::view::ListRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const SEARCH_PLACEHOLDER: &str = "Search features…";
const ACTIVE_MARKER: &str = "▸ ";
const ROW_INDENT: &str = "  ";
/// Display width of `ACTIVE_MARKER` and `ROW_INDENT`.
const MARKER_WIDTH: usize = 2;

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search(f, app, chunks[0]);
    render_list(f, app, chunks[1]);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let line = if app.search_mode {
        Line::from(vec![
            Span::styled(app.search_input.clone(), app.style("search_input")),
            Span::styled("_", app.style("search_input")),
        ])
    } else if app.search_input.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            app.style("search_placeholder"),
        ))
    } else {
        Line::from(Span::styled(
            app.search_input.clone(),
            app.style("search_input"),
        ))
    };

    let border_style = if app.search_mode {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    f.render_widget(paragraph, area);
}

fn render_list(f: &mut Frame, app: &mut App, area: Rect) {
    app.list_area = area;
    if area.width < 3 || area.height < 3 {
        return;
    }

    let title = if app.search_input.is_empty() {
        format!(" Features ({}) ", app.view.len())
    } else {
        format!(" Features ({}/{}) ", app.view.len(), app.stats.total)
    };
    let border_style = if app.focus == Focus::List && !app.search_mode {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let rows = app.list_rows();
    if rows.is_empty() {
        app.list_state.select(None);
        let paragraph = Paragraph::new(Span::styled(
            "No matching features",
            app.style("list_empty"),
        ))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let inner_width = usize::from(area.width.saturating_sub(2));
    let title_width = inner_width.saturating_sub(MARKER_WIDTH);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            ListRow::Header { category, count } => ListItem::new(Line::from(Span::styled(
                truncate_to_width(&format!("{category} ({count})"), inner_width).into_owned(),
                app.style("list_header"),
            ))),
            ListRow::Feature { title, active, .. } => {
                let (marker, style) = if *active {
                    (ACTIVE_MARKER, app.style("list_active"))
                } else {
                    (ROW_INDENT, app.style("list_item"))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(truncate_to_width(title, title_width).into_owned(), style),
                ]))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.style("list_cursor"));

    app.list_state.select(app.cursor_row());
    f.render_stateful_widget(list, area, &mut app.list_state);
}
