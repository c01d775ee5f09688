//! Input handling for the TUI.
//!
//! This module processes keyboard and mouse input and dispatches to the
//! appropriate handler based on the current mode and focus.

use crate::app::{App, AppEvent, Focus};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use super::helpers::spawn_copy;
use super::Action;

/// Lines moved per mouse wheel notch in the detail pane.
const WHEEL_LINES: usize = 3;

/// Map the current focus panel to a keybinding context for context-specific lookups.
fn focus_to_context(focus: Focus) -> KbContext {
    match focus {
        Focus::List => KbContext::FeatureList,
        Focus::Detail => KbContext::Detail,
    }
}

/// Main input dispatch function.
///
/// Routes input to the appropriate handler based on current mode and focus.
pub(super) async fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Help overlay captures all keys when visible
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    if app.search_mode {
        return Ok(handle_search_input(app, code, modifiers));
    }

    handle_browse_input(app, code, modifiers, event_tx).await
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while typing a query.
///
/// Only Search-context bindings apply; every other printable key is text.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let action = app
        .keybindings
        .action_in_context(code, modifiers, KbContext::Search);

    match action {
        Some(KbAction::ExitSearch) => app.exit_search(false),
        Some(KbAction::CommitSearch) => app.exit_search(true),
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::Quit) => return Action::Quit,
        _ => match code {
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_search_char(c);
            }
            KeyCode::Char('c') => return Action::Quit,
            _ => {}
        },
    }
    Action::Continue
}

/// Handle input in the list and detail panels.
async fn handle_browse_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    let context = focus_to_context(app.focus);
    let action = app.keybindings.action_for_key(code, modifiers, context);

    match action {
        Some(KbAction::Quit) => return Ok(Action::Quit),
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::NavTop) => app.nav_top(),
        Some(KbAction::NavBottom) => app.nav_bottom(),
        Some(KbAction::Select) => {
            app.select_at_cursor();
        }
        Some(KbAction::CycleFocus) => app.cycle_focus(),
        Some(KbAction::Back) => {
            // Priority: leave the detail pane first, then clear the query
            if app.focus == Focus::Detail {
                app.focus = Focus::List;
            } else if !app.search_input.is_empty() {
                app.set_query("");
            }
        }
        Some(KbAction::EnterSearch) => app.enter_search(),
        Some(KbAction::CopyCode) => {
            spawn_copy(app, event_tx);
        }
        Some(KbAction::ToggleTheme) => {
            let variant = app.toggle_theme().await;
            app.set_status(format!("{} theme", variant.name()));
        }
        Some(KbAction::ScrollDown) => app.scroll_down(1),
        Some(KbAction::ScrollUp) => app.scroll_up(1),
        Some(KbAction::PageDown) => app.scroll_down(app.page_size()),
        Some(KbAction::PageUp) => app.scroll_up(app.page_size()),
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        Some(KbAction::ExitSearch) | Some(KbAction::CommitSearch) | None => {}
    }
    Ok(Action::Continue)
}

/// Handle a mouse event.
///
/// A left click selects the feature row under the pointer. The wheel scrolls
/// the detail pane when it has focus and moves the cursor otherwise.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click_at(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown => match app.focus {
            Focus::Detail => app.scroll_down(WHEEL_LINES),
            Focus::List => app.nav_down(),
        },
        MouseEventKind::ScrollUp => match app.focus {
            Focus::Detail => app.scroll_up(WHEEL_LINES),
            Focus::List => app.nav_up(),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, FeatureRecord};
    use crate::clipboard::{Clipboard, ClipboardError};
    use crate::config::Config;
    use crate::highlight::PlainHighlighter;
    use crate::preferences::PreferenceManager;
    use crate::theme::ThemeVariant;
    use futures::future::BoxFuture;
    use ratatui::layout::Rect;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingClipboard {
        written: Arc<Mutex<Vec<String>>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>> {
            let written = self.written.clone();
            Box::pin(async move {
                written.lock().unwrap().push(text);
                Ok(())
            })
        }
    }

    fn test_app() -> App {
        App::new(
            catalog::builtin(),
            PreferenceManager::from_config(&Config::default()),
            None,
            Box::new(PlainHighlighter),
        )
    }

    async fn press(app: &mut App, code: KeyCode, tx: &mpsc::Sender<AppEvent>) -> Action {
        handle_input(app, code, KeyModifiers::NONE, tx).await.unwrap()
    }

    fn first_feature() -> &'static FeatureRecord {
        let view = crate::query::filter(catalog::builtin(), "");
        view.get(0).unwrap()
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        assert!(matches!(press(&mut app, KeyCode::Char('q'), &tx).await, Action::Quit));
    }

    #[tokio::test]
    async fn test_enter_selects_cursor_feature() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        press(&mut app, KeyCode::Enter, &tx).await;
        assert_eq!(app.selection.map(|f| f.id), Some(first_feature().id));
    }

    #[tokio::test]
    async fn test_typed_q_goes_to_query_in_search_mode() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        press(&mut app, KeyCode::Char('/'), &tx).await;
        assert!(app.search_mode);

        let action = press(&mut app, KeyCode::Char('q'), &tx).await;
        assert!(matches!(action, Action::Continue));
        assert_eq!(app.search_input, "q");
    }

    #[tokio::test]
    async fn test_search_escape_clears_and_enter_keeps() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);

        press(&mut app, KeyCode::Char('/'), &tx).await;
        for c in "map".chars() {
            press(&mut app, KeyCode::Char(c), &tx).await;
        }
        press(&mut app, KeyCode::Enter, &tx).await;
        assert!(!app.search_mode);
        assert_eq!(app.search_input, "map");

        press(&mut app, KeyCode::Char('/'), &tx).await;
        press(&mut app, KeyCode::Backspace, &tx).await;
        assert_eq!(app.search_input, "ma");
        press(&mut app, KeyCode::Esc, &tx).await;
        assert!(!app.search_mode);
        assert_eq!(app.search_input, "");
        assert_eq!(app.view.len(), app.catalog.len());
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_from_search() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        app.enter_search();
        let action = handle_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, &tx)
            .await
            .unwrap();
        assert!(matches!(action, Action::Quit));
        assert_eq!(app.search_input, "");
    }

    #[tokio::test]
    async fn test_back_leaves_detail_then_clears_query() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        app.set_query("array");
        app.focus = Focus::Detail;

        press(&mut app, KeyCode::Esc, &tx).await;
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.search_input, "array");

        press(&mut app, KeyCode::Esc, &tx).await;
        assert_eq!(app.search_input, "");
    }

    #[tokio::test]
    async fn test_toggle_theme_key() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        press(&mut app, KeyCode::Char('t'), &tx).await;
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        press(&mut app, KeyCode::Char('t'), &tx).await;
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    #[tokio::test]
    async fn test_copy_sends_shown_code() {
        let clipboard = RecordingClipboard::default();
        let written = clipboard.written.clone();
        let mut app = test_app().with_clipboard(Arc::new(clipboard));
        let (tx, mut rx) = mpsc::channel(8);

        press(&mut app, KeyCode::Enter, &tx).await;
        press(&mut app, KeyCode::Char('c'), &tx).await;

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::CopyFinished(Ok(()))));
        assert_eq!(*written.lock().unwrap(), vec![first_feature().code.to_string()]);
    }

    #[tokio::test]
    async fn test_copy_without_display_is_noop() {
        let clipboard = RecordingClipboard::default();
        let written = clipboard.written.clone();
        let mut app = test_app().with_clipboard(Arc::new(clipboard));
        let (tx, mut rx) = mpsc::channel(8);

        press(&mut app, KeyCode::Char('c'), &tx).await;
        assert!(rx.try_recv().is_err());
        assert!(written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_help_overlay_captures_keys() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        press(&mut app, KeyCode::Char('?'), &tx).await;
        assert!(app.show_help);

        // q closes the overlay instead of quitting
        let action = press(&mut app, KeyCode::Char('q'), &tx).await;
        assert!(matches!(action, Action::Continue));
        assert!(!app.show_help);
    }

    #[tokio::test]
    async fn test_detail_keys_scroll_when_focused() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);
        press(&mut app, KeyCode::Enter, &tx).await;
        press(&mut app, KeyCode::Tab, &tx).await;
        assert_eq!(app.focus, Focus::Detail);

        let cursor = app.cursor;
        press(&mut app, KeyCode::Char('j'), &tx).await;
        assert_eq!(app.detail_scroll, 1);
        assert_eq!(app.cursor, cursor);
    }

    #[tokio::test]
    async fn test_mouse_click_selects_row() {
        let mut app = test_app();
        app.list_area = Rect::new(0, 3, 30, 20);
        // Row 0 is the first header; row 1 the first feature.
        handle_mouse(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 2,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.selection.map(|f| f.id), Some(first_feature().id));
    }
}
