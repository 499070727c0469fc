//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default endpoint of the AWS news API.
pub const DEFAULT_NEWS_API_URL: &str = "https://api.aws-news.com/articles";

/// Default AWS What's New RSS feed.
pub const DEFAULT_FEED_URL: &str = "https://aws.amazon.com/about-aws/whats-new/recent/feed/";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream news API and feed configuration.
    pub news: NewsConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the outbound news API and RSS feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Base endpoint of the news API.
    pub api_url: String,

    /// URL of the What's New RSS feed.
    pub feed_url: String,

    /// Upper bound for a single outbound request, in seconds.
    pub request_timeout_secs: u64,

    /// User agent sent with outbound requests.
    pub user_agent: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_NEWS_API_URL.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            request_timeout_secs: 30,
            user_agent: format!("aws-news-mcp-server/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Whether prompts are registered with the server at all.
    pub enabled: bool,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "aws-news-and-blog-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            news: NewsConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_NEWS_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_NEWS_API_URL") {
            info!("News API endpoint overridden: {}", url);
            config.news.api_url = url;
        }

        if let Ok(url) = std::env::var("MCP_FEED_URL") {
            info!("Feed URL overridden: {}", url);
            config.news.feed_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_REQUEST_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.news.request_timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_REQUEST_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.news.request_timeout_secs
                ),
            }
        }

        if let Ok(enabled) = std::env::var("MCP_PROMPTS_ENABLED") {
            config.prompts.enabled = parse_flag(&enabled).unwrap_or(true);
            if !config.prompts.enabled {
                info!("Prompts disabled by MCP_PROMPTS_ENABLED");
            }
        }

        config
    }
}

/// Parse a boolean environment flag.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
