//! System clipboard access.
//!
//! Text is written by piping it into the platform's clipboard tool as a child
//! process. Tools are tried in order and the first one that succeeds wins. A
//! tool that is missing from `PATH` or exits non-zero (e.g. `wl-copy` outside
//! Wayland) falls through to the next one.

use futures::future::BoxFuture;
use std::io::ErrorKind;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Errors from clipboard writes.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (tried {0})")]
    NoTool(String),

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Asynchronous clipboard writer.
pub trait Clipboard: Send + Sync {
    fn write(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>>;
}

/// A clipboard tool invocation: program plus fixed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const PLATFORM_TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(not(target_os = "macos"))]
const PLATFORM_TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

/// Clipboard backed by external tools.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            tools: PLATFORM_TOOLS.to_vec(),
        }
    }
}

impl SystemClipboard {
    /// Use an explicit tool list instead of the platform default.
    pub fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }
}

impl Clipboard for SystemClipboard {
    fn write(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>> {
        let tools = self.tools.clone();
        Box::pin(async move {
            let mut last_error = None;
            for tool in &tools {
                match pipe_into(*tool, &text).await {
                    Ok(()) => return Ok(()),
                    Err(ClipboardError::Spawn { source, .. })
                        if source.kind() == ErrorKind::NotFound =>
                    {
                        tracing::debug!(tool = tool.program, "Clipboard tool not installed");
                    }
                    Err(e) => {
                        tracing::debug!(tool = tool.program, error = %e, "Clipboard tool failed, trying next");
                        last_error = Some(e);
                    }
                }
            }
            if let Some(e) = last_error {
                return Err(e);
            }
            let tried = tools
                .iter()
                .map(|t| t.program)
                .collect::<Vec<_>>()
                .join(", ");
            Err(ClipboardError::NoTool(tried))
        })
    }
}

async fn pipe_into(tool: ClipboardTool, text: &str) -> Result<(), ClipboardError> {
    let spawn_err = |source| ClipboardError::Spawn {
        tool: tool.program,
        source,
    };

    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(spawn_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        // A tool that exits early closes the pipe; its exit status decides.
        if let Err(e) = stdin.write_all(text.as_bytes()).await {
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(spawn_err(e));
            }
        }
    }

    let status = child.wait().await.map_err(spawn_err)?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed {
            tool: tool.program,
            status,
        })
    }
}
