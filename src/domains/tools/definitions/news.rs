//! General AWS news tool definition.
//!
//! Searches the AWS news API for news, blog posts, or both.

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
use crate::domains::news::{
    NewsClient, NewsQuery,
    query::{DEFAULT_NEWS_TYPE, DEFAULT_NUMBER_OF_RESULTS},
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the general news tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAwsNewsParams {
    /// AWS topic or service to search for.
    #[schemars(description = "AWS topic or service to search for (e.g., 's3', 'lambda', 'ec2')")]
    pub topic: String,

    /// Type of news to return.
    #[schemars(description = "Type of news to return: all, news, or blogs (default: all)")]
    #[serde(default = "default_news_type")]
    pub news_type: String,

    /// Whether to include regional expansion news.
    #[schemars(description = "Whether to include regional expansion news (default: false)")]
    #[serde(default)]
    pub include_regional_expansions: bool,

    /// Maximum number of results to return.
    #[schemars(description = "Maximum number of results to return (default: 40)")]
    #[serde(default = "default_number_of_results")]
    pub number_of_results: u32,

    /// Only return articles published after this date.
    #[schemars(description = "Optional ISO 8601 date to filter results (e.g., '2025-01-01T00:00:00Z')")]
    #[serde(default)]
    pub since_date: Option<String>,
}

pub(crate) fn default_news_type() -> String {
    DEFAULT_NEWS_TYPE.to_string()
}

pub(crate) fn default_number_of_results() -> u32 {
    DEFAULT_NUMBER_OF_RESULTS
}

// ============================================================================
// Tool Definition
// ============================================================================

/// General news tool - news and blog posts for a topic.
pub struct GetAwsNewsTool;

impl GetAwsNewsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_aws_news";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns a list of AWS news articles with announcements of new products, services, and capabilities for the specified AWS topic/service. \
        You can filter on news type (news or blogs; both by default), optionally include regional expansion news (default: false), \
        and optionally pass a since_date in ISO 8601 format. \
        Examples: topic=\"s3\" for all S3 news; topic=\"ec2\", news_type=\"blogs\" for EC2 blog posts; \
        topic=\"lambda\", since_date=\"2025-01-01T00:00:00Z\" for Lambda news since January 2025; \
        topic=\"dynamodb\", include_regional_expansions=true for DynamoDB regional expansions.";

    /// Prefix of error messages.
    pub const CONTEXT: &'static str = "fetching AWS news";

    /// Build the news query for these parameters.
    pub fn query(params: &GetAwsNewsParams) -> NewsQuery {
        NewsQuery::new(params.topic.clone())
            .with_news_type(params.news_type.clone())
            .with_regional_expansions(params.include_regional_expansions)
            .with_limit(params.number_of_results)
            .with_since_date(params.since_date.clone())
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(topic = %params.topic, news_type = %params.news_type))]
    pub async fn execute(params: &GetAwsNewsParams, client: &NewsClient) -> CallToolResult {
        info!("AWS news tool called for topic: {}", params.topic);
        tool_result(Self::CONTEXT, client.search(&Self::query(params)).await)
    }

    /// Parse raw arguments and execute.
    pub async fn call(arguments: serde_json::Value, client: &NewsClient) -> CallToolResult {
        match parse_arguments::<GetAwsNewsParams>(arguments, Self::CONTEXT) {
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
            input_schema: cached_schema_for_type::<GetAwsNewsParams>(),
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::news::{NewsEnvelope, mock_client};
    use crate::domains::tools::definitions::common::result_text;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[test]
    fn test_params_defaults() {
        let params: GetAwsNewsParams = serde_json::from_value(json!({ "topic": "s3" })).unwrap();
        assert_eq!(params.news_type, "all");
        assert!(!params.include_regional_expansions);
        assert_eq!(params.number_of_results, 40);
        assert_eq!(params.since_date, None);
    }

    #[tokio::test]
    async fn test_execute_returns_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(query_param("article_type", "blog"))
            .and(query_param("since", "2025-05-01T00:00:00Z"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "articles": [{ "id": "1" }] })),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let args = json!({
            "topic": "lambda",
            "news_type": "BLOGS",
            "since_date": "2025-05-01T00:00:00Z"
        });
        let result = GetAwsNewsTool::call(args, &client).await;

        assert_eq!(result.is_error, Some(false));
        let envelope: NewsEnvelope = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(envelope.topic, "lambda");
        assert_eq!(envelope.news_type, "BLOGS");
        assert!(!envelope.include_regional_expansions);
        assert_eq!(envelope.article_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_date_returns_error_string() {
        let server = MockServer::start().await;
        let client = mock_client(&server);

        let args = json!({ "topic": "lambda", "since_date": "invalid-date" });
        let result = GetAwsNewsTool::call(args, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Error fetching AWS news: Invalid date format. Please use ISO 8601 format (e.g., 2025-05-01T00:00:00Z)"
        );
    }

    #[tokio::test]
    async fn test_http_failure_returns_error_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let result = GetAwsNewsTool::call(json!({ "topic": "s3" }), &client).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Error fetching AWS news: HTTP status 404: not found"
        );
    }

    #[tokio::test]
    async fn test_malformed_arguments_return_error_string() {
        let server = MockServer::start().await;
        let client = mock_client(&server);

        for args in [
            json!({}),
            json!({ "topic": 42 }),
            json!({ "topic": "s3", "number_of_results": "many" }),
            json!({ "topic": "s3", "number_of_results": 0 }),
            json!({ "topic": "" }),
            json!([1, 2, 3]),
        ] {
            let result = GetAwsNewsTool::call(args, &client).await;
            assert_eq!(result.is_error, Some(true));
            assert!(result_text(&result).starts_with("Error fetching AWS news: "));
        }
    }
}
