use anyhow::Result;

use super::schema::Database;

impl Database {
    // ========================================================================
    // User Preferences Operations
    // ========================================================================

    /// Get a single preference value by key.
    ///
    /// Keys use dotted convention: `theme`, `keybind.quit`, etc.
    ///
    /// # Returns
    ///
    /// The preference value if the key exists, or `None` if not set.
    pub async fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM user_preferences WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(value,)| value))
    }

    /// Set a preference value (UPSERT).
    ///
    /// Inserts the key-value pair if it doesn't exist, or updates the value and
    /// timestamp if the key already exists.
    ///
    /// # Arguments
    ///
    /// * `key` - Dotted preference key (e.g., `keybind.quit`)
    /// * `value` - The preference value to store
    pub async fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_preferences (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get all preferences matching a key prefix.
    ///
    /// Useful for loading grouped settings (e.g., all `keybind.*` entries).
    ///
    /// # Arguments
    ///
    /// * `prefix` - The key prefix to match (e.g., `keybind.` returns `keybind.quit`, `keybind.copy_code`, etc.)
    ///
    /// # Returns
    ///
    /// A vector of (key, value) pairs matching the prefix, ordered by key.
    pub async fn get_preferences_by_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let pattern = format!("{}%", prefix);
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM user_preferences WHERE key LIKE ? ORDER BY key")
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    /// Remove every stored preference, returning how many rows were deleted.
    pub async fn clear_preferences(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM user_preferences")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
