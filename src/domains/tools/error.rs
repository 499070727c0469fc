//! Tool-specific error types.
//!
//! Failures inside a tool never surface here: they are rendered into the
//! tool result. Only dispatch problems do.

use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
