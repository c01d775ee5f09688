//! Preference manager that merges config.toml defaults with DB overrides.
//!
//! Config values serve as defaults; DB values (user_preferences table) override them.
//! Writes always go to the DB, never to the config file.
use std::collections::HashMap;

use anyhow::Result;

use crate::config::Config;
use crate::storage::Database;
use crate::theme::ThemeVariant;

/// Preference key holding the persisted theme variant.
pub const THEME_KEY: &str = "theme";

const KEYBIND_PREFIX: &str = "keybind.";

// ============================================================================
// PreferenceManager
// ============================================================================

/// Merged preference store: config.toml defaults + DB overrides.
///
/// On load, config values are flattened into a `HashMap<String, String>`, then
/// all DB preferences are layered on top. Reads are in-memory. Writes
/// persist to the DB first and update the in-memory map only on success.
#[derive(Debug, Clone)]
pub struct PreferenceManager {
    prefs: HashMap<String, String>,
}

impl PreferenceManager {
    /// Load preferences by merging config defaults with DB overrides.
    ///
    /// 1. Flatten `Config` fields into dotted key-value pairs
    /// 2. Query all rows from `user_preferences` table
    /// 3. DB values overwrite config values for matching keys
    pub async fn load(config: &Config, db: &Database) -> Result<Self> {
        let mut prefs = Self::flatten_config(config);

        let db_prefs = db.get_preferences_by_prefix("").await?;
        tracing::debug!(count = db_prefs.len(), "Loaded stored preferences");
        for (key, value) in db_prefs {
            prefs.insert(key, value);
        }

        Ok(Self { prefs })
    }

    /// Create from config only (no DB). Fallback for when DB load fails.
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefs: Self::flatten_config(config),
        }
    }

    /// Get a preference value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.prefs.get(key).map(String::as_str)
    }

    /// Set a preference: writes to DB and updates in-memory map.
    pub async fn set(&mut self, db: &Database, key: &str, value: &str) -> Result<()> {
        db.set_preference(key, value).await?;
        self.set_local(key, value);
        Ok(())
    }

    /// Update the in-memory map only. Used when no database is available.
    pub fn set_local(&mut self, key: &str, value: &str) {
        self.prefs.insert(key.to_string(), value.to_string());
    }

    // ========================================================================
    // Type-safe Accessors
    // ========================================================================

    /// Persisted theme variant. Absent or unrecognized values mean dark.
    pub fn theme_variant(&self) -> ThemeVariant {
        match self.get(THEME_KEY) {
            Some(name) => ThemeVariant::from_str_name(name).unwrap_or_else(|| {
                tracing::warn!(value = %name, "Unknown theme preference, using dark");
                ThemeVariant::Dark
            }),
            None => ThemeVariant::Dark,
        }
    }

    /// Language tag for the highlighter.
    pub fn language(&self) -> &str {
        self.get("language").unwrap_or("javascript")
    }

    pub fn syntax_theme_dark(&self) -> &str {
        self.get("syntax_theme_dark").unwrap_or("base16-ocean.dark")
    }

    pub fn syntax_theme_light(&self) -> &str {
        self.get("syntax_theme_light").unwrap_or("InspiredGitHub")
    }

    /// Whether mouse capture is enabled.
    pub fn mouse(&self) -> bool {
        self.get("mouse")
            .and_then(|v| v.parse().ok())
            .unwrap_or(true)
    }

    /// Keybinding overrides as action name → key string.
    pub fn keybinding_overrides(&self) -> HashMap<String, String> {
        self.prefs
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(KEYBIND_PREFIX)
                    .map(|action| (action.to_string(), v.clone()))
            })
            .collect()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Flatten Config struct into dotted key-value pairs.
    fn flatten_config(config: &Config) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert(THEME_KEY.to_string(), config.theme.clone());
        map.insert("language".to_string(), config.language.clone());
        map.insert(
            "syntax_theme_dark".to_string(),
            config.syntax_theme_dark.clone(),
        );
        map.insert(
            "syntax_theme_light".to_string(),
            config.syntax_theme_light.clone(),
        );
        map.insert("mouse".to_string(), config.mouse.to_string());

        for (action, key_str) in &config.keybindings {
            map.insert(format!("{KEYBIND_PREFIX}{action}"), key_str.clone());
        }

        map
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        Database::open(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_load_defaults_from_config() {
        let db = test_db().await;
        let pm = PreferenceManager::load(&Config::default(), &db).await.unwrap();

        assert_eq!(pm.theme_variant(), ThemeVariant::Dark);
        assert_eq!(pm.language(), "javascript");
        assert_eq!(pm.syntax_theme_dark(), "base16-ocean.dark");
        assert_eq!(pm.syntax_theme_light(), "InspiredGitHub");
        assert!(pm.mouse());
    }

    #[tokio::test]
    async fn test_db_overrides_config() {
        let db = test_db().await;
        db.set_preference(THEME_KEY, "light").await.unwrap();

        let pm = PreferenceManager::load(&Config::default(), &db).await.unwrap();
        assert_eq!(pm.theme_variant(), ThemeVariant::Light);
    }

    #[tokio::test]
    async fn test_set_persists_and_updates_memory() {
        let db = test_db().await;
        let mut pm = PreferenceManager::load(&Config::default(), &db).await.unwrap();

        pm.set(&db, THEME_KEY, "light").await.unwrap();
        assert_eq!(pm.theme_variant(), ThemeVariant::Light);

        let stored = db.get_preference(THEME_KEY).await.unwrap();
        assert_eq!(stored, Some("light".to_string()));
    }

    #[tokio::test]
    async fn test_failed_set_leaves_memory_unchanged() {
        let db = test_db().await;
        let mut pm = PreferenceManager::load(&Config::default(), &db).await.unwrap();
        db.pool.close().await;

        assert!(pm.set(&db, THEME_KEY, "light").await.is_err());
        assert_eq!(pm.theme_variant(), ThemeVariant::Dark);
    }

    #[tokio::test]
    async fn test_get_returns_none_for_unknown() {
        let db = test_db().await;
        let pm = PreferenceManager::load(&Config::default(), &db).await.unwrap();
        assert_eq!(pm.get("nonexistent.key"), None);
    }

    #[test]
    fn test_unknown_theme_value_means_dark() {
        let mut pm = PreferenceManager::from_config(&Config::default());
        pm.set_local(THEME_KEY, "solarized");
        assert_eq!(pm.theme_variant(), ThemeVariant::Dark);
    }

    #[test]
    fn test_theme_value_must_match_exactly() {
        let mut pm = PreferenceManager::from_config(&Config::default());
        pm.set_local(THEME_KEY, "Light");
        assert_eq!(pm.theme_variant(), ThemeVariant::Dark);
        pm.set_local(THEME_KEY, "light");
        assert_eq!(pm.theme_variant(), ThemeVariant::Light);
    }

    #[tokio::test]
    async fn test_config_keybindings_flattened() {
        let db = test_db().await;
        let mut config = Config::default();
        config
            .keybindings
            .insert("quit".to_string(), "Ctrl+q".to_string());
        config
            .keybindings
            .insert("copy_code".to_string(), "y".to_string());

        let pm = PreferenceManager::load(&config, &db).await.unwrap();

        assert_eq!(pm.get("keybind.quit"), Some("Ctrl+q"));
        assert_eq!(pm.get("keybind.copy_code"), Some("y"));
    }

    #[tokio::test]
    async fn test_keybinding_overrides_merge_db_over_config() {
        let db = test_db().await;
        let mut config = Config::default();
        config
            .keybindings
            .insert("quit".to_string(), "Ctrl+q".to_string());
        db.set_preference("keybind.quit", "Ctrl+w").await.unwrap();
        db.set_preference("keybind.toggle_theme", "T").await.unwrap();

        let pm = PreferenceManager::load(&config, &db).await.unwrap();
        let overrides = pm.keybinding_overrides();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("quit").map(String::as_str), Some("Ctrl+w"));
        assert_eq!(overrides.get("toggle_theme").map(String::as_str), Some("T"));
    }

    #[tokio::test]
    async fn test_preferences_survive_reload() {
        let db = test_db().await;
        let config = Config::default();

        let mut pm = PreferenceManager::load(&config, &db).await.unwrap();
        pm.set(&db, THEME_KEY, "light").await.unwrap();
        pm.set(&db, "keybind.quit", "Ctrl+w").await.unwrap();
        drop(pm);

        let pm2 = PreferenceManager::load(&config, &db).await.unwrap();
        assert_eq!(pm2.theme_variant(), ThemeVariant::Light);
        assert_eq!(pm2.get("keybind.quit"), Some("Ctrl+w"));
    }

    #[test]
    fn test_from_config_fallback() {
        let mut config = Config::default();
        config.theme = "light".to_string();
        config.language = "typescript".to_string();
        config.mouse = false;

        let pm = PreferenceManager::from_config(&config);
        assert_eq!(pm.theme_variant(), ThemeVariant::Light);
        assert_eq!(pm.language(), "typescript");
        assert!(!pm.mouse());
    }

    #[tokio::test]
    async fn test_config_file_load_and_merge() {
        let db = test_db().await;

        let dir = std::env::temp_dir().join("jsref_prefs_lifecycle_test");
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config.toml");
        std::fs::write(
            &config_path,
            r#"
theme = "light"
syntax_theme_light = "Solarized (light)"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        db.set_preference(THEME_KEY, "dark").await.unwrap();

        let pm = PreferenceManager::load(&config, &db).await.unwrap();
        assert_eq!(pm.theme_variant(), ThemeVariant::Dark);
        assert_eq!(pm.syntax_theme_light(), "Solarized (light)");

        std::fs::remove_dir_all(&dir).ok();
    }
}
