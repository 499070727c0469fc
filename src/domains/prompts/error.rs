//! Prompt lookup and argument errors.
//!
//! All of these reach the client as MCP invalid-params errors; the rendered
//! prompt text itself can never fail.

use rmcp::ErrorData as McpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt registered under this name, or prompts are disabled.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Argument present but not parseable (e.g. `days=-3`).
    #[error("Invalid argument value for '{0}': {1}")]
    InvalidArgument(String, String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }

    pub fn invalid_argument(arg: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument(arg.into(), reason.into())
    }
}

impl From<PromptError> for McpError {
    fn from(err: PromptError) -> Self {
        let data = match &err {
            PromptError::NotFound(name) => serde_json::json!({ "prompt": name }),
            PromptError::MissingArgument(arg) | PromptError::InvalidArgument(arg, _) => {
                serde_json::json!({ "argument": arg })
            }
        };
        McpError::invalid_params(err.to_string(), Some(data))
    }
}
