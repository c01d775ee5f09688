use crate::catalog::{self, CatalogStats, FeatureRecord};
use crate::clipboard::{Clipboard, ClipboardError, SystemClipboard};
use crate::highlight::{HighlightedCode, Highlighter};
use crate::keybindings::KeybindingRegistry;
use crate::preferences::{PreferenceManager, THEME_KEY};
use crate::query::{self, FilteredView};
use crate::storage::Database;
use crate::theme::{StyleMap, ThemeVariant};
use crate::view::{self, Display, ListRow};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::ListState;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Maximum scroll offset for the detail pane (ratatui u16 limit).
pub const MAX_SCROLL: usize = u16::MAX as usize;

/// Maximum allowed search query length, in characters.
pub const MAX_SEARCH_LENGTH: usize = 256;

/// How long the copy label reads "copied" after a successful copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";

// ============================================================================
// Focus and Event Types
// ============================================================================

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Detail,
}

/// Results from background tasks, delivered to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A clipboard write finished.
    CopyFinished(Result<(), ClipboardError>),
    /// A background task panicked.
    TaskPanicked { task: &'static str, error: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Process-scoped browser state.
///
/// Owns the catalog snapshot, the current query and its derived view, the
/// selection and everything needed to draw a frame. The filter and view
/// models it calls into are pure; all mutation happens here, on the UI task.
pub struct App {
    pub db: Option<Database>,
    pub prefs: PreferenceManager,

    // Catalog
    pub catalog: &'static [FeatureRecord],
    pub stats: CatalogStats,

    // Theme
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    pub keybindings: KeybindingRegistry,

    // Collaborators
    highlighter: Box<dyn Highlighter>,
    pub clipboard: Arc<dyn Clipboard>,
    /// Language tag passed to the highlighter.
    pub language: String,

    // Search
    pub search_mode: bool,
    pub search_input: String,
    /// Derived from `catalog` and `search_input`; replaced on every change.
    pub view: FilteredView<'static>,

    // List
    /// Position of the cursor within `view.features()`.
    pub cursor: usize,
    /// Ratatui list state, synced from `cursor` each frame.
    pub list_state: ListState,
    /// Last rendered list area, for mapping mouse clicks to rows.
    pub list_area: Rect,

    // Selection and detail
    pub selection: Option<&'static FeatureRecord>,
    pub display: Display,
    highlighted: Option<HighlightedCode>,
    pub detail_scroll: usize,
    /// Largest useful scroll offset, updated while rendering the detail pane.
    pub detail_max_scroll: usize,
    /// Visible detail lines, updated while rendering.
    pub detail_visible_lines: usize,

    pub focus: Focus,

    /// Set on a successful copy; the label reverts once it is older than
    /// `COPY_ACK_DURATION`.
    pub copy_ack: Option<Instant>,

    // Status message with expiry. Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    pub show_help: bool,
    pub help_scroll_offset: usize,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme_variant", &self.theme_variant)
            .field("search_input", &self.search_input)
            .field("cursor", &self.cursor)
            .field("selection", &self.selection.map(|f| f.id))
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Initial load: take the catalog, count it, derive the unfiltered view
    /// and restore the persisted theme before anything is drawn.
    pub fn new(
        catalog: &'static [FeatureRecord],
        prefs: PreferenceManager,
        db: Option<Database>,
        highlighter: Box<dyn Highlighter>,
    ) -> Self {
        let stats = catalog::stats(catalog);
        tracing::info!(
            total = stats.total,
            categories = stats.categories,
            "Catalog loaded"
        );

        let mut keybindings = KeybindingRegistry::new();
        for warning in keybindings.apply_overrides(&prefs.keybinding_overrides()) {
            tracing::warn!("{}", warning);
        }

        let language = prefs.language().to_string();
        let mut app = Self {
            db,
            prefs,
            catalog,
            stats,
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
            keybindings,
            highlighter,
            clipboard: Arc::new(SystemClipboard::default()),
            language,
            search_mode: false,
            search_input: String::new(),
            view: query::filter(catalog, ""),
            cursor: 0,
            list_state: ListState::default(),
            list_area: Rect::default(),
            selection: None,
            display: Display::Empty,
            highlighted: None,
            detail_scroll: 0,
            detail_max_scroll: MAX_SCROLL,
            detail_visible_lines: 0,
            focus: Focus::List,
            copy_ack: None,
            status_message: None,
            show_help: false,
            help_scroll_offset: 0,
            needs_redraw: true,
        };
        app.restore_theme();
        app
    }

    /// Resolve a semantic style role (e.g. "list_header") from the active theme.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Replace the clipboard collaborator.
    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    // ========================================================================
    // List
    // ========================================================================

    /// Rows for the feature list, rebuilt from the current view and selection.
    pub fn list_rows(&self) -> Vec<ListRow<'static>> {
        view::list_model(&self.view, self.selection)
    }

    /// Index of the cursor's row within `list_rows()`, headers included.
    pub fn cursor_row(&self) -> Option<usize> {
        if self.view.is_empty() {
            return None;
        }
        let mut row = 0;
        let mut remaining = self.cursor;
        for group in self.view.groups() {
            row += 1; // header
            if remaining < group.features.len() {
                return Some(row + remaining);
            }
            row += group.features.len();
            remaining -= group.features.len();
        }
        None
    }

    /// Feature under the cursor.
    pub fn cursor_feature(&self) -> Option<&'static FeatureRecord> {
        self.view.get(self.cursor)
    }

    pub fn nav_down(&mut self) {
        let len = self.view.len();
        if len > 0 {
            self.cursor = self.cursor.saturating_add(1).min(len - 1);
        }
    }

    pub fn nav_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn nav_top(&mut self) {
        self.cursor = 0;
    }

    pub fn nav_bottom(&mut self) {
        self.cursor = self.view.len().saturating_sub(1);
    }

    /// List row under terminal row `y`, if any.
    ///
    /// Accounts for the list border and the list's scroll offset.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.list_area;
        let inner_top = area.y.saturating_add(1);
        let inner_bottom = area.y.saturating_add(area.height).saturating_sub(1);
        let inside_x = x >= area.x && x < area.x.saturating_add(area.width);
        if !inside_x || y < inner_top || y >= inner_bottom {
            return None;
        }
        Some(self.list_state.offset() + usize::from(y - inner_top))
    }

    /// Mouse click on the list: select the feature row under the pointer.
    ///
    /// Clicks on headers or outside the list do nothing.
    pub fn click_at(&mut self, x: u16, y: u16) -> bool {
        let Some(row) = self.row_at(x, y) else {
            return false;
        };
        let rows = self.list_rows();
        let Some(id) = rows.get(row).and_then(ListRow::feature_id) else {
            return false;
        };
        self.focus = Focus::List;
        self.select_feature(id)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select the record with `id` and show its detail.
    ///
    /// Unknown ids are ignored. Returns whether the selection changed state.
    pub fn select_feature(&mut self, id: &str) -> bool {
        let Some(record) = catalog::find(self.catalog, id) else {
            tracing::debug!(id, "Ignoring selection of unknown feature");
            return false;
        };

        self.selection = Some(record);
        self.display = Display::Showing(record);
        if let Some(pos) = self.view.position(record.id) {
            self.cursor = pos;
        }
        self.detail_scroll = 0;
        self.detail_max_scroll = MAX_SCROLL;
        self.restyle();
        self.needs_redraw = true;
        tracing::debug!(id = record.id, "Feature selected");
        true
    }

    /// Select the feature under the cursor.
    pub fn select_at_cursor(&mut self) -> bool {
        match self.cursor_feature() {
            Some(record) => self.select_feature(record.id),
            None => false,
        }
    }

    /// Discard any styled code and highlight the shown record from scratch.
    fn restyle(&mut self) {
        self.highlighted = None;
        if let Display::Showing(record) = self.display {
            let lines = self
                .highlighter
                .highlight(record.code, &self.language, self.theme_variant);
            self.highlighted = Some(HighlightedCode {
                feature_id: record.id,
                variant: self.theme_variant,
                lines,
            });
        }
    }

    /// Styled code for the shown record under the active theme.
    ///
    /// `None` when nothing is shown or the cached result was produced for a
    /// different record or variant.
    pub fn highlighted_code(&self) -> Option<&[Line<'static>]> {
        let Display::Showing(record) = self.display else {
            return None;
        };
        self.highlighted
            .as_ref()
            .filter(|h| h.is_for(record.id, self.theme_variant))
            .map(|h| h.lines.as_slice())
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Replace the query and re-derive the view.
    ///
    /// The query is capped at `MAX_SEARCH_LENGTH` characters. The cursor
    /// follows the selection if it is still visible, otherwise it is clamped.
    pub fn set_query(&mut self, query: &str) {
        let capped: String = query.chars().take(MAX_SEARCH_LENGTH).collect();
        if capped.len() < query.len() {
            self.set_status(format!(
                "Search query too long (max {} chars)",
                MAX_SEARCH_LENGTH
            ));
        }
        self.search_input = capped;
        self.view = query::filter(self.catalog, &self.search_input);

        let followed = self.selection.and_then(|s| self.view.position(s.id));
        self.cursor = followed.unwrap_or_else(|| self.cursor.min(self.view.len().saturating_sub(1)));
        self.needs_redraw = true;
        tracing::debug!(
            query = %self.search_input,
            matches = self.view.len(),
            "Filter applied"
        );
    }

    pub fn push_search_char(&mut self, c: char) {
        if self.search_input.chars().count() >= MAX_SEARCH_LENGTH {
            self.set_status(format!(
                "Search query too long (max {} chars)",
                MAX_SEARCH_LENGTH
            ));
            return;
        }
        let mut query = std::mem::take(&mut self.search_input);
        query.push(c);
        self.set_query(&query);
    }

    pub fn pop_search_char(&mut self) {
        let mut query = std::mem::take(&mut self.search_input);
        query.pop();
        self.set_query(&query);
    }

    pub fn enter_search(&mut self) {
        self.search_mode = true;
        self.focus = Focus::List;
    }

    /// Leave search mode. `keep` retains the query; otherwise it is cleared.
    pub fn exit_search(&mut self, keep: bool) {
        self.search_mode = false;
        if !keep && !self.search_input.is_empty() {
            self.set_query("");
        }
    }

    // ========================================================================
    // Copy
    // ========================================================================

    /// Code of the shown record, or `None` when nothing is displayed.
    pub fn code_to_copy(&self) -> Option<&'static str> {
        match self.display {
            Display::Showing(record) => Some(record.code),
            Display::Empty => None,
        }
    }

    /// Start (or restart) the copy acknowledgment window.
    pub fn acknowledge_copy(&mut self) {
        self.copy_ack = Some(Instant::now());
        self.needs_redraw = true;
    }

    pub fn copy_acknowledged(&self) -> bool {
        self.copy_ack
            .is_some_and(|at| at.elapsed() < COPY_ACK_DURATION)
    }

    /// Label of the copy control.
    pub fn copy_label(&self) -> &'static str {
        if self.copy_acknowledged() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    /// Drop an expired acknowledgment. Returns true if one was cleared.
    pub fn clear_expired_copy_ack(&mut self) -> bool {
        if self.copy_ack.is_some() && !self.copy_acknowledged() {
            self.copy_ack = None;
            return true;
        }
        false
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Switch the palette and highlight style sheet, restyling shown code.
    pub fn apply_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.restyle();
        self.needs_redraw = true;
    }

    /// Apply the persisted theme preference.
    pub fn restore_theme(&mut self) {
        let variant = self.prefs.theme_variant();
        self.apply_theme(variant);
        tracing::debug!(theme = variant.name(), "Theme restored");
    }

    /// Flip the theme and persist the new value.
    ///
    /// A store failure is logged; the in-memory toggle stands.
    pub async fn toggle_theme(&mut self) -> ThemeVariant {
        let next = self.theme_variant.toggled();
        self.apply_theme(next);

        let value = next.as_pref_value();
        match &self.db {
            Some(db) => {
                if let Err(e) = self.prefs.set(db, THEME_KEY, value).await {
                    tracing::warn!(error = %e, theme = value, "Failed to persist theme");
                }
            }
            None => self.prefs.set_local(THEME_KEY, value),
        }
        tracing::debug!(theme = next.name(), "Theme toggled");
        next
    }

    // ========================================================================
    // Detail scrolling and focus
    // ========================================================================

    pub fn scroll_down(&mut self, lines: usize) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(lines)
            .min(self.detail_max_scroll)
            .min(MAX_SCROLL);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    /// Lines per page in the detail pane (at least one).
    pub fn page_size(&self) -> usize {
        self.detail_visible_lines.saturating_sub(2).max(1)
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List => Focus::Detail,
            Focus::Detail => Focus::List,
        };
    }

    // ========================================================================
    // Status
    // ========================================================================

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds)
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::highlight::PlainHighlighter;
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};
    use ratatui::text::Span;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::{self, Duration};

    static SAMPLE: &[FeatureRecord] = &[
        FeatureRecord {
            id: "a",
            category: "X",
            title: "Foo",
            description: "",
            code: "foo();",
            output: Some("1"),
            notes: None,
        },
        FeatureRecord {
            id: "b",
            category: "Y",
            title: "Bar",
            description: "",
            code: "bar();",
            output: None,
            notes: None,
        },
        FeatureRecord {
            id: "c",
            category: "X",
            title: "Baz",
            description: "",
            code: "baz();",
            output: None,
            notes: Some(&["n"]),
        },
    ];

    /// Highlighter that tags every span with the variant and counts calls.
    #[derive(Default)]
    struct CountingHighlighter {
        calls: Arc<AtomicUsize>,
    }

    impl Highlighter for CountingHighlighter {
        fn highlight(&self, code: &str, _language: &str, variant: ThemeVariant) -> Vec<Line<'static>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let color = match variant {
                ThemeVariant::Dark => Color::White,
                ThemeVariant::Light => Color::Black,
            };
            vec![Line::from(Span::styled(
                code.to_string(),
                Style::default().fg(color),
            ))]
        }
    }

    fn test_app() -> App {
        App::new(
            SAMPLE,
            PreferenceManager::from_config(&Config::default()),
            None,
            Box::new(PlainHighlighter),
        )
    }

    async fn test_app_with_db() -> (App, Database) {
        let db = Database::open(":memory:").await.unwrap();
        let prefs = PreferenceManager::load(&Config::default(), &db).await.unwrap();
        let app = App::new(SAMPLE, prefs, Some(db.clone()), Box::new(PlainHighlighter));
        (app, db)
    }

    fn active_ids(app: &App) -> Vec<&'static str> {
        app.list_rows()
            .into_iter()
            .filter_map(|r| match r {
                ListRow::Feature { id, active: true, .. } => Some(id),
                _ => None,
            })
            .collect()
    }

    // Initial load
    #[test]
    fn test_initial_load() {
        let app = test_app();
        assert_eq!(app.stats, CatalogStats { total: 3, categories: 2 });
        assert_eq!(app.view.len(), 3);
        assert_eq!(app.display, Display::Empty);
        assert!(app.selection.is_none());
        assert!(active_ids(&app).is_empty());
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    // Navigation
    #[test]
    fn test_nav_skips_headers() {
        let mut app = test_app();
        // Rows: [X] a c [Y] b
        assert_eq!(app.cursor_row(), Some(1));
        app.nav_down();
        assert_eq!(app.cursor_feature().map(|f| f.id), Some("c"));
        assert_eq!(app.cursor_row(), Some(2));
        app.nav_down();
        assert_eq!(app.cursor_feature().map(|f| f.id), Some("b"));
        assert_eq!(app.cursor_row(), Some(4));
        app.nav_down();
        assert_eq!(app.cursor_feature().map(|f| f.id), Some("b"));
        app.nav_top();
        app.nav_up();
        assert_eq!(app.cursor, 0);
        app.nav_bottom();
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_nav_empty_view() {
        let mut app = test_app();
        app.set_query("zzz");
        app.nav_down();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_row(), None);
        assert!(!app.select_at_cursor());
    }

    // Selection
    #[test]
    fn test_select_marks_exactly_one_row() {
        let mut app = test_app();
        assert!(app.select_feature("b"));
        assert_eq!(active_ids(&app), vec!["b"]);
        assert_eq!(app.display, Display::Showing(&SAMPLE[1]));

        assert!(app.select_feature("a"));
        assert_eq!(active_ids(&app), vec!["a"]);
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut app = test_app();
        assert!(!app.select_feature("zzz"));
        assert_eq!(app.display, Display::Empty);
    }

    #[test]
    fn test_select_resets_scroll_and_moves_cursor() {
        let mut app = test_app();
        app.select_feature("a");
        app.scroll_down(5);
        assert_eq!(app.detail_scroll, 5);
        app.select_feature("b");
        assert_eq!(app.detail_scroll, 0);
        assert_eq!(app.cursor_feature().map(|f| f.id), Some("b"));
    }

    #[test]
    fn test_display_never_returns_to_empty() {
        let mut app = test_app();
        app.select_feature("a");
        app.set_query("zzz");
        app.select_feature("nope");
        assert_eq!(app.display, Display::Showing(&SAMPLE[0]));
    }

    #[test]
    fn test_select_highlights_from_scratch() {
        let highlighter = CountingHighlighter::default();
        let calls = Arc::clone(&highlighter.calls);
        let mut app = App::new(
            SAMPLE,
            PreferenceManager::from_config(&Config::default()),
            None,
            Box::new(highlighter),
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(app.highlighted_code().is_none());

        app.select_feature("a");
        app.select_feature("b");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let lines = app.highlighted_code().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "bar();");
    }

    // Search
    #[test]
    fn test_query_scenario_foo() {
        let mut app = test_app();
        app.set_query("foo");
        assert_eq!(app.view.groups().len(), 1);
        assert_eq!(app.view.groups()[0].category, "X");
        assert_eq!(app.view.features().map(|f| f.id).collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_empty_query_after_no_matches_restores_list() {
        let mut app = test_app();
        let initial = app.list_rows();
        app.set_query("zzz");
        assert!(app.list_rows().is_empty());
        app.set_query("");
        assert_eq!(app.list_rows(), initial);
    }

    #[test]
    fn test_cursor_follows_selection_through_filter() {
        let mut app = test_app();
        app.select_feature("b");
        app.set_query("ba");
        // Matches: [X] c(Baz) [Y] b(Bar)
        assert_eq!(app.cursor_feature().map(|f| f.id), Some("b"));
    }

    #[test]
    fn test_cursor_clamped_when_view_shrinks() {
        let mut app = test_app();
        app.nav_bottom();
        app.set_query("foo");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_query_length_capped() {
        let mut app = test_app();
        let long = "a".repeat(MAX_SEARCH_LENGTH + 10);
        app.set_query(&long);
        assert_eq!(app.search_input.chars().count(), MAX_SEARCH_LENGTH);
        assert!(app.status_message.is_some());

        app.push_search_char('b');
        assert_eq!(app.search_input.chars().count(), MAX_SEARCH_LENGTH);
    }

    #[test]
    fn test_search_editing() {
        let mut app = test_app();
        app.enter_search();
        for c in "bar".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.view.len(), 1);
        app.pop_search_char();
        assert_eq!(app.search_input, "ba");
        assert_eq!(app.view.len(), 2);

        app.exit_search(true);
        assert!(!app.search_mode);
        assert_eq!(app.search_input, "ba");

        app.enter_search();
        app.exit_search(false);
        assert_eq!(app.search_input, "");
        assert_eq!(app.view.len(), 3);
    }

    // Copy
    #[test]
    fn test_nothing_to_copy_without_selection() {
        let mut app = test_app();
        assert_eq!(app.code_to_copy(), None);
        app.select_feature("c");
        assert_eq!(app.code_to_copy(), Some("baz();"));
    }

    #[tokio::test]
    async fn test_copy_ack_lasts_two_seconds() {
        let mut app = test_app();
        time::pause();
        assert_eq!(app.copy_label(), COPY_LABEL);

        app.acknowledge_copy();
        assert_eq!(app.copy_label(), COPIED_LABEL);

        time::advance(Duration::from_millis(1999)).await;
        assert!(!app.clear_expired_copy_ack());
        assert_eq!(app.copy_label(), COPIED_LABEL);

        time::advance(Duration::from_millis(1)).await;
        assert_eq!(app.copy_label(), COPY_LABEL);
        assert!(app.clear_expired_copy_ack());
        assert!(app.copy_ack.is_none());
    }

    #[tokio::test]
    async fn test_second_copy_restarts_window() {
        let mut app = test_app();
        time::pause();
        app.acknowledge_copy();
        time::advance(Duration::from_millis(1500)).await;
        app.acknowledge_copy();
        time::advance(Duration::from_millis(1500)).await;
        assert_eq!(app.copy_label(), COPIED_LABEL);
        time::advance(Duration::from_millis(500)).await;
        assert_eq!(app.copy_label(), COPY_LABEL);
    }

    // Theme
    #[tokio::test]
    async fn test_toggle_theme_twice_restores_visual_and_persisted_state() {
        let (mut app, db) = test_app_with_db().await;
        let before = app.theme.resolve("list_cursor");

        assert_eq!(app.toggle_theme().await, ThemeVariant::Light);
        assert_eq!(db.get_preference(THEME_KEY).await.unwrap().as_deref(), Some("light"));
        assert_ne!(app.theme.resolve("list_cursor"), before);
        assert_eq!(app.theme_variant.icon(), "☾");

        assert_eq!(app.toggle_theme().await, ThemeVariant::Dark);
        assert_eq!(db.get_preference(THEME_KEY).await.unwrap().as_deref(), Some("dark"));
        assert_eq!(app.theme.resolve("list_cursor"), before);
        assert_eq!(app.theme_variant.icon(), "☀");
    }

    #[tokio::test]
    async fn test_toggle_restyles_shown_code() {
        let mut app = App::new(
            SAMPLE,
            PreferenceManager::from_config(&Config::default()),
            None,
            Box::new(CountingHighlighter::default()),
        );
        app.select_feature("a");
        let dark_fg = app.highlighted_code().unwrap()[0].spans[0].style.fg;
        app.toggle_theme().await;
        let light_fg = app.highlighted_code().unwrap()[0].spans[0].style.fg;
        assert_eq!(dark_fg, Some(Color::White));
        assert_eq!(light_fg, Some(Color::Black));
    }

    #[tokio::test]
    async fn test_toggle_survives_store_failure() {
        let (mut app, db) = test_app_with_db().await;
        db.pool.close().await;
        assert_eq!(app.toggle_theme().await, ThemeVariant::Light);
        assert_eq!(app.theme_variant, ThemeVariant::Light);
    }

    #[tokio::test]
    async fn test_startup_restores_light_theme() {
        let db = Database::open(":memory:").await.unwrap();
        db.set_preference(THEME_KEY, "light").await.unwrap();
        let prefs = PreferenceManager::load(&Config::default(), &db).await.unwrap();
        let app = App::new(SAMPLE, prefs, Some(db), Box::new(PlainHighlighter));
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert_eq!(
            app.theme.resolve("status_bar"),
            ThemeVariant::Light.palette().status_bar
        );
    }

    #[test]
    fn test_startup_unknown_theme_is_dark() {
        let mut prefs = PreferenceManager::from_config(&Config::default());
        prefs.set_local(THEME_KEY, "sepia");
        let app = App::new(SAMPLE, prefs, None, Box::new(PlainHighlighter));
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    // Mouse
    #[test]
    fn test_click_selects_feature_rows_only() {
        let mut app = test_app();
        app.list_area = Rect::new(0, 3, 30, 10);
        // y=4 is the first inner row: the X header.
        assert!(!app.click_at(2, 4));
        assert_eq!(app.display, Display::Empty);
        // y=5 is feature "a".
        assert!(app.click_at(2, 5));
        assert_eq!(active_ids(&app), vec!["a"]);
        // y=8 is feature "b" (after the Y header at y=7).
        assert!(app.click_at(2, 8));
        assert_eq!(active_ids(&app), vec!["b"]);
        // Border and outside clicks are ignored.
        assert!(!app.click_at(2, 3));
        assert!(!app.click_at(40, 5));
    }

    // Scrolling
    #[test]
    fn test_scroll_is_clamped() {
        let mut app = test_app();
        app.scroll_up(1);
        assert_eq!(app.detail_scroll, 0);
        app.detail_max_scroll = 4;
        app.scroll_down(10);
        assert_eq!(app.detail_scroll, 4);
    }

    #[test]
    fn test_cycle_focus() {
        let mut app = test_app();
        assert_eq!(app.focus, Focus::List);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Detail);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::List);
    }

    // Status message expiry with time control
    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}
