//! AWS announcements tool definition.
//!
//! Official AWS News announcements only (`news_type` forced to `news`).

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, parse_arguments, tool_result};
use super::news::default_number_of_results;
use crate::domains::news::{NewsClient, NewsQuery, NewsType};

/// Parameters for the announcements tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAwsAnnouncementsParams {
    #[schemars(description = "AWS topic or service to search for (e.g., 's3', 'lambda', 'ec2')")]
    pub topic: String,

    #[schemars(description = "Whether to include regional expansion news (default: false)")]
    #[serde(default)]
    pub include_regional_expansions: bool,

    #[schemars(description = "Maximum number of results to return (default: 40)")]
    #[serde(default = "default_number_of_results")]
    pub number_of_results: u32,

    #[schemars(description = "Optional ISO 8601 date to filter results (e.g., '2025-01-01T00:00:00Z')")]
    #[serde(default)]
    pub since_date: Option<String>,
}

pub struct GetAwsAnnouncementsTool;

impl GetAwsAnnouncementsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_aws_announcements";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns only official AWS News announcements for a topic/service.";

    pub const CONTEXT: &'static str = "fetching AWS announcements";

    pub fn query(params: &GetAwsAnnouncementsParams) -> NewsQuery {
        NewsQuery::new(params.topic.clone())
            .with_news_type(NewsType::News.as_str())
            .with_regional_expansions(params.include_regional_expansions)
            .with_limit(params.number_of_results)
            .with_since_date(params.since_date.clone())
    }

    #[instrument(skip_all, fields(topic = %params.topic))]
    pub async fn execute(params: &GetAwsAnnouncementsParams, client: &NewsClient) -> CallToolResult {
        info!("AWS announcements tool called for topic: {}", params.topic);
        tool_result(Self::CONTEXT, client.search(&Self::query(params)).await)
    }

    pub async fn call(arguments: serde_json::Value, client: &NewsClient) -> CallToolResult {
        match parse_arguments::<GetAwsAnnouncementsParams>(arguments, Self::CONTEXT) {
            Ok(params) => Self::execute(&params, client).await,
            Err(message) => error_result(message),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NewsClient>,
    ) -> serde_json::Value {
        super::common::http_response(Self::call(arguments, &client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAwsAnnouncementsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<NewsClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Ok(Self::call(serde_json::Value::Object(args), &client).await) }.boxed()
        })
    }
}
