//! Helper functions for UI operations.
//!
//! This module contains utility functions shared across the UI layer,
//! including panic capture for background tasks and clipboard dispatch.

use crate::app::{App, AppEvent};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;

/// Wraps a future to catch panics and convert them to errors.
///
/// Instead of a panicking task silently disappearing (caught by Tokio's
/// runtime but not handled), the panic is converted to `Err(String)`
/// containing the panic message.
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(e) = panic.downcast_ref::<Box<dyn std::error::Error + Send>>() {
                e.to_string()
            } else {
                format!("Unknown panic: {:?}", (*panic).type_id())
            }
        })
}

/// Write the shown record's code to the clipboard in the background.
///
/// Does nothing when no record is displayed. The outcome arrives as
/// `AppEvent::CopyFinished`; the UI keeps handling input meanwhile.
pub(super) fn spawn_copy(app: &App, event_tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(code) = app.code_to_copy() else {
        tracing::debug!("Nothing displayed, ignoring copy");
        return false;
    };

    let clipboard = app.clipboard.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let event = match catch_task_panic(clipboard.write(code.to_string())).await {
            Ok(result) => AppEvent::CopyFinished(result),
            Err(panic_msg) => {
                tracing::error!(task = "clipboard_write", error = %panic_msg, "Background task panicked");
                AppEvent::TaskPanicked {
                    task: "clipboard_write",
                    error: panic_msg,
                }
            }
        };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, event = "CopyFinished", "Channel send failed (receiver dropped)");
        }
    });
    true
}
