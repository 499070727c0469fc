//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the news tools and the optional prompt service.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built dynamically in `domains/tools/router.rs`, so
//! adding a new tool does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    news::NewsClient,
    prompts::{PromptError, PromptService},
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

const INSTRUCTIONS: &str = "AWS news and blog server. Use get_aws_news for news and blog posts about an AWS service, \
    get_aws_announcements for official announcements only, get_aws_blogs for blog posts only, \
    get_aws_regional_expansions for region availability news, and get_aws_feed_news for the latest entries \
    of the AWS What's New RSS feed. Dates use ISO 8601 (e.g., 2025-05-01T00:00:00Z).";

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp. Every tool shares one
/// [`NewsClient`]; prompts are only served when a [`PromptService`] is
/// attached.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Outbound client shared by all tools.
    client: Arc<NewsClient>,

    /// Service for handling prompt-related requests, if enabled.
    prompt_service: Option<Arc<PromptService>>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Prompts are registered unless `config.prompts.enabled` is false.
    pub fn new(config: Config) -> Self {
        let prompt_service = config
            .prompts
            .enabled
            .then(|| Arc::new(PromptService::new()));
        Self::build(config, prompt_service)
    }

    /// Create a server with an explicit prompt service (or none).
    pub fn with_prompt_service(config: Config, prompt_service: Option<PromptService>) -> Self {
        Self::build(config, prompt_service.map(Arc::new))
    }

    fn build(config: Config, prompt_service: Option<Arc<PromptService>>) -> Self {
        let client = Arc::new(NewsClient::new(config.news.clone()));
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared news client.
    pub fn client(&self) -> &Arc<NewsClient> {
        &self.client
    }

    /// Whether prompts are advertised and served.
    pub fn prompts_enabled(&self) -> bool {
        self.prompt_service.is_some()
    }

    fn capabilities(&self) -> ServerCapabilities {
        if self.prompts_enabled() {
            ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build()
        } else {
            ServerCapabilities::builder().enable_tools().build()
        }
    }

    async fn prompt_list(&self) -> Vec<Prompt> {
        match &self.prompt_service {
            Some(service) => service.list_prompts().await,
            None => Vec::new(),
        }
    }

    async fn render_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<GetPromptResult, PromptError> {
        let service = self
            .prompt_service
            .as_ref()
            .ok_or_else(|| PromptError::not_found(name))?;
        service
            .get_prompt(name, arguments.map(prompt_arguments))
            .await
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let registry = ToolRegistry::new(self.client.clone());
        registry.call_tool(name, arguments).await
    }

    /// Capabilities advertised to clients, as JSON (for HTTP transport).
    pub fn capabilities_json(&self) -> serde_json::Value {
        serde_json::to_value(self.capabilities()).unwrap_or_default()
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        self.prompt_list()
            .await
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, PromptError> {
        let arguments = arguments.and_then(|v| match v {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        });
        let result = self.render_prompt(name, arguments).await?;
        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }
}

/// Flatten JSON prompt arguments to the string map the templates expect.
///
/// Numbers and booleans are accepted as their textual form; other values
/// are dropped.
fn prompt_arguments(map: serde_json::Map<String, serde_json::Value>) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::String(s) => Some((k, s)),
            serde_json::Value::Number(n) => Some((k, n.to_string())),
            serde_json::Value::Bool(b) => Some((k, b.to_string())),
            _ => None,
        })
        .collect()
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: self.capabilities(),
            ..Default::default()
        };
        info.server_info.name = self.config.server.name.clone();
        info.server_info.version = self.config.server.version.clone();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.prompt_list().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.render_prompt(&request.name, request.arguments)
            .await
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server_with_prompts(enabled: bool) -> McpServer {
        let mut config = Config::default();
        config.prompts.enabled = enabled;
        McpServer::new(config)
    }

    #[test]
    fn test_server_info() {
        let server = server_with_prompts(true);
        let info = server.get_info();
        assert_eq!(info.server_info.name, "aws-news-and-blog-mcp-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.instructions.unwrap().contains("get_aws_feed_news"));
    }

    #[test]
    fn test_list_tools() {
        let server = server_with_prompts(true);
        let tools = server.list_tools();
        assert_eq!(tools.len(), 5);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[tokio::test]
    async fn test_prompts_disabled() {
        let server = server_with_prompts(false);
        assert!(server.get_info().capabilities.prompts.is_none());
        assert!(server.list_prompts().await.is_empty());

        let err = server
            .get_prompt("aws_feed_latest", None)
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_prompt_with_numeric_arguments() {
        let server = server_with_prompts(true);
        let result = server
            .get_prompt(
                "aws_comprehensive_search",
                Some(json!({ "service": "lambda", "days": 7, "include_regional": true })),
            )
            .await
            .unwrap();
        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.starts_with("Call get_aws_news with: topic='lambda'"));
        assert!(text.contains("include_regional_expansions=true"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_argument() {
        let server = server_with_prompts(true);
        let err = server
            .get_prompt("aws_recent_updates", Some(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::MissingArgument(_)));
    }

    #[tokio::test]
    async fn test_with_prompt_service_none() {
        let server = McpServer::with_prompt_service(Config::default(), None);
        assert!(!server.prompts_enabled());
        assert!(server.get_info().capabilities.prompts.is_none());
        assert!(server.list_prompts().await.is_empty());

        let err = server
            .get_prompt("aws_recent_updates", Some(json!({ "service": "lambda" })))
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_with_prompt_service_fixed_clock() {
        use crate::domains::prompts::FixedClock;
        use chrono::{TimeZone, Utc};

        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let service = PromptService::with_clock(Arc::new(FixedClock(now)));
        let server = McpServer::with_prompt_service(Config::default(), Some(service));
        assert!(server.prompts_enabled());
        assert!(server.get_info().capabilities.prompts.is_some());
        assert_eq!(server.list_prompts().await.len(), 8);

        let result = server
            .get_prompt(
                "aws_recent_updates",
                Some(json!({ "service": "lambda", "days": 5 })),
            )
            .await
            .unwrap();
        assert_eq!(
            result["messages"][0]["content"]["text"],
            "Call get_aws_news with: topic='lambda', news_type='all', since_date='2025-01-10T10:00:00Z', number_of_results=40"
        );
    }

    #[test]
    fn test_prompt_arguments_flattening() {
        let map = json!({ "a": "x", "b": 3, "c": false, "d": null, "e": [1] });
        let serde_json::Value::Object(map) = map else {
            unreachable!()
        };
        let args = prompt_arguments(map);
        assert_eq!(args.len(), 3);
        assert_eq!(args["b"], "3");
        assert_eq!(args["c"], "false");
    }
}
