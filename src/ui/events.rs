//! Background task event handling.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
///
/// A successful clipboard write starts the copy acknowledgment. Failures are
/// logged only; the copy label stays as it was.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CopyFinished(Ok(())) => {
            tracing::debug!(
                feature = app.selection.map(|f| f.id),
                "Example code copied to clipboard"
            );
            app.acknowledge_copy();
        }
        AppEvent::CopyFinished(Err(e)) => {
            tracing::warn!(error = %e, "Clipboard write failed");
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error, "Background task panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::clipboard::ClipboardError;
    use crate::config::Config;
    use crate::highlight::PlainHighlighter;
    use crate::preferences::PreferenceManager;

    fn test_app() -> App {
        App::new(
            catalog::builtin(),
            PreferenceManager::from_config(&Config::default()),
            None,
            Box::new(PlainHighlighter),
        )
    }

    #[tokio::test]
    async fn test_copy_success_acknowledges() {
        let mut app = test_app();
        handle_app_event(&mut app, AppEvent::CopyFinished(Ok(())));
        assert!(app.copy_acknowledged());
    }

    #[tokio::test]
    async fn test_copy_failure_leaves_label() {
        let mut app = test_app();
        handle_app_event(
            &mut app,
            AppEvent::CopyFinished(Err(ClipboardError::NoTool("pbcopy".to_string()))),
        );
        assert!(!app.copy_acknowledged());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_task_panic_is_absorbed() {
        let mut app = test_app();
        handle_app_event(
            &mut app,
            AppEvent::TaskPanicked {
                task: "clipboard_write",
                error: "boom".to_string(),
            },
        );
        assert!(!app.copy_acknowledged());
    }
}
