//! AWS News and Blog MCP Server Library
//!
//! A Model Context Protocol server that searches the AWS news API and reads
//! the AWS What's New RSS feed on behalf of an AI agent.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **news**: Query building, outbound HTTP client, feed parsing and result envelopes
//!   - **tools**: MCP tools wrapping the news client
//!   - **prompts**: Prompt templates that turn a request into a tool-call instruction
//!
//! # Example
//!
//! ```rust,no_run
//! use aws_news_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
