//! News-specific error types.

use thiserror::Error;

/// Message returned when `since_date` is not a valid ISO 8601 timestamp.
pub const INVALID_DATE_MESSAGE: &str =
    "Invalid date format. Please use ISO 8601 format (e.g., 2025-05-01T00:00:00Z)";

/// Errors that can occur while querying the news API or the RSS feed.
#[derive(Debug, Error)]
pub enum NewsError {
    /// A tool argument was rejected before any outbound call.
    #[error("{0}")]
    InvalidArgument(String),

    /// The upstream service answered with a non-2xx status.
    #[error("HTTP status {status}: {body}")]
    Http { status: u16, body: String },

    /// The upstream service did not answer in time.
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The news API returned a body that is not JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The RSS document is malformed.
    #[error("{0}")]
    FeedParse(String),

    /// Anything else.
    #[error("{0}")]
    Unexpected(String),
}

impl NewsError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The fixed error for an unparseable `since_date`.
    pub fn invalid_date() -> Self {
        Self::InvalidArgument(INVALID_DATE_MESSAGE.to_string())
    }

    /// Create a new "unexpected" error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Classify a reqwest failure, turning timeouts into [`NewsError::Timeout`].
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                seconds: timeout_secs,
            }
        } else {
            Self::Request(err)
        }
    }

    /// Whether this error belongs to the HTTP class (status, network, timeout).
    pub fn is_http(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Timeout { .. } | Self::Request(_)
        )
    }

    /// Render the error as the string handed back to the calling agent.
    ///
    /// Feed parse failures keep their own prefix whatever the calling tool.
    pub fn render(&self, context: &str) -> String {
        match self {
            Self::FeedParse(diagnostic) => format!("Error parsing RSS feed: {}", diagnostic),
            other => format!("Error {}: {}", context, other),
        }
    }
}
