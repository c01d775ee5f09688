use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Database-specific errors with user-friendly messages
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Another instance of the application has locked the database
    #[error("Another instance of jsref appears to be running. Please close it and try again.")]
    InstanceLocked,

    /// Migration failed
    #[error("Database migration failed: {0}")]
    Migration(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Other(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Whether an error message describes SQLite lock contention.
    pub(crate) fn is_lock_message(message: &str) -> bool {
        let message = message.to_lowercase();
        // SQLITE_BUSY (5), SQLITE_LOCKED (6)
        message.contains("database is locked")
            || message.contains("database table is locked")
            || message.contains("sqlite_busy")
            || message.contains("sqlite_locked")
    }

    /// Classify a sqlx error, mapping lock failures to `InstanceLocked`.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        let message = err.to_string();
        // SQLITE_CANTOPEN (14) is reported when another process holds the file.
        if Self::is_lock_message(&message)
            || message.to_lowercase().contains("unable to open database file")
        {
            return DatabaseError::InstanceLocked;
        }

        DatabaseError::Other(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_messages_are_recognized() {
        assert!(DatabaseError::is_lock_message("error: database is locked"));
        assert!(DatabaseError::is_lock_message("SQLITE_BUSY"));
        assert!(!DatabaseError::is_lock_message("no such table: user_preferences"));
    }

    #[test]
    fn non_lock_errors_stay_generic() {
        let err = DatabaseError::from_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, DatabaseError::Other(_)));
    }

    #[test]
    fn locked_error_message_names_the_app() {
        assert!(DatabaseError::InstanceLocked.to_string().contains("jsref"));
    }
}
