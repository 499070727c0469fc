//! AWS blogs tool definition.
//!
//! Blog posts only; regional expansions are always excluded.

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

/// Parameters for the blogs tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAwsBlogsParams {
    #[schemars(description = "AWS topic or service to search for (e.g., 's3', 'lambda', 'ec2')")]
    pub topic: String,

    #[schemars(description = "Maximum number of results to return (default: 40)")]
    #[serde(default = "default_number_of_results")]
    pub number_of_results: u32,

    #[schemars(description = "Optional ISO 8601 date to filter results (e.g., '2025-01-01T00:00:00Z')")]
    #[serde(default)]
    pub since_date: Option<String>,
}

pub struct GetAwsBlogsTool;

impl GetAwsBlogsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_aws_blogs";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns only AWS Blog posts for a topic/service.";

    pub const CONTEXT: &'static str = "fetching AWS blogs";

    pub fn query(params: &GetAwsBlogsParams) -> NewsQuery {
        NewsQuery::new(params.topic.clone())
            .with_news_type(NewsType::Blogs.as_str())
            .with_regional_expansions(false)
            .with_limit(params.number_of_results)
            .with_since_date(params.since_date.clone())
    }

    #[instrument(skip_all, fields(topic = %params.topic))]
    pub async fn execute(params: &GetAwsBlogsParams, client: &NewsClient) -> CallToolResult {
        info!("AWS blogs tool called for topic: {}", params.topic);
        tool_result(Self::CONTEXT, client.search(&Self::query(params)).await)
    }

    pub async fn call(arguments: serde_json::Value, client: &NewsClient) -> CallToolResult {
        match parse_arguments::<GetAwsBlogsParams>(arguments, Self::CONTEXT) {
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
            input_schema: cached_schema_for_type::<GetAwsBlogsParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::news::{NewsEnvelope, mock_client};
    use crate::domains::tools::definitions::common::result_text;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, query_param},
    };

    #[tokio::test]
    async fn test_never_includes_regional_expansions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("article_type", "blog"))
            .and(query_param("hide_regional_expansions", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        // Unknown fields, including a regional flag, are ignored.
        let args = json!({ "topic": "s3", "include_regional_expansions": true, "number_of_results": 3 });
        let result = GetAwsBlogsTool::call(args, &client).await;

        assert_eq!(result.is_error, Some(false));
        let envelope: NewsEnvelope = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(envelope.news_type, "blogs");
        assert!(!envelope.include_regional_expansions);
    }

    #[test]
    fn test_query_forced_values() {
        let params = GetAwsBlogsParams {
            topic: "rds".to_string(),
            number_of_results: 40,
            since_date: None,
        };
        let query = GetAwsBlogsTool::query(&params);
        assert_eq!(query.kind(), NewsType::Blogs);
        assert!(!query.include_regional_expansions);
    }
}
