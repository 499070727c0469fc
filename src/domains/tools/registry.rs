//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata, kept in step with the router by its tests

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::news::NewsClient;
#[cfg(feature = "http")]
use super::error::ToolError;

use super::definitions::{
    GetAwsAnnouncementsTool, GetAwsBlogsTool, GetAwsFeedNewsTool, GetAwsNewsTool,
    GetAwsRegionalExpansionsTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: Arc<NewsClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<NewsClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetAwsNewsTool::NAME,
            GetAwsAnnouncementsTool::NAME,
            GetAwsBlogsTool::NAME,
            GetAwsRegionalExpansionsTool::NAME,
            GetAwsFeedNewsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Transports list tools through the `ToolRouter`, not from here. The
    /// router tests check this list against `ToolRouter::list_all`.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetAwsNewsTool::to_tool(),
            GetAwsAnnouncementsTool::to_tool(),
            GetAwsBlogsTool::to_tool(),
            GetAwsRegionalExpansionsTool::to_tool(),
            GetAwsFeedNewsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let client = self.client.clone();
        let response = match name {
            GetAwsNewsTool::NAME => GetAwsNewsTool::http_handler(arguments, client).await,
            GetAwsAnnouncementsTool::NAME => {
                GetAwsAnnouncementsTool::http_handler(arguments, client).await
            }
            GetAwsBlogsTool::NAME => GetAwsBlogsTool::http_handler(arguments, client).await,
            GetAwsRegionalExpansionsTool::NAME => {
                GetAwsRegionalExpansionsTool::http_handler(arguments, client).await
            }
            GetAwsFeedNewsTool::NAME => GetAwsFeedNewsTool::http_handler(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::NewsConfig;

    fn test_client() -> Arc<NewsClient> {
        Arc::new(NewsClient::new(NewsConfig::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_client());
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert_eq!(names.len(), ToolRegistry::get_all_tools().len());
        assert!(names.contains(&"get_aws_feed_news"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_dispatches() {
        use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let registry = ToolRegistry::new(Arc::new(crate::domains::news::mock_client(&server)));
        let result = registry
            .call_tool("get_aws_blogs", serde_json::json!({ "topic": "s3" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("\"news_type\": \"blogs\""));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_client());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
