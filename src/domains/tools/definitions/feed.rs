//! AWS What's New feed tool definition.
//!
//! Reads the official RSS feed, optionally filtered by keyword.

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
use crate::domains::news::{NewsClient, feed::DEFAULT_MAX_ARTICLES, FeedRequest};

/// Parameters for the feed tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAwsFeedNewsParams {
    /// Maximum number of articles to return.
    #[schemars(description = "Maximum number of articles to return (default: 10)")]
    #[serde(default = "default_max_articles")]
    pub max_articles: u32,

    /// Keywords matched against title and description.
    #[schemars(description = "Optional keywords to filter articles (searches in title and description)")]
    #[serde(default)]
    pub search_keywords: Option<String>,
}

fn default_max_articles() -> u32 {
    DEFAULT_MAX_ARTICLES
}

/// Feed tool - latest entries of the AWS What's New RSS feed.
pub struct GetAwsFeedNewsTool;

impl GetAwsFeedNewsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_aws_feed_news";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetches the latest AWS announcements directly from the official AWS What's New RSS feed \
        (product launches, service updates, regional expansions, feature announcements). \
        Entries come back newest first. Optionally filter with search_keywords and cap the count with max_articles. \
        Examples: max_articles=10 for the latest ten; search_keywords=\"lambda\" for Lambda announcements; \
        search_keywords=\"s3\", max_articles=5 for recent S3 announcements.";

    pub const CONTEXT: &'static str = "fetching AWS feed";

    pub fn request(params: &GetAwsFeedNewsParams) -> FeedRequest {
        FeedRequest {
            max_articles: params.max_articles,
            search_keywords: params.search_keywords.clone(),
        }
    }

    #[instrument(skip_all, fields(max_articles = params.max_articles))]
    pub async fn execute(params: &GetAwsFeedNewsParams, client: &NewsClient) -> CallToolResult {
        info!(
            "AWS feed tool called (keywords: {:?})",
            params.search_keywords
        );
        tool_result(Self::CONTEXT, client.latest_feed(&Self::request(params)).await)
    }

    pub async fn call(arguments: serde_json::Value, client: &NewsClient) -> CallToolResult {
        match parse_arguments::<GetAwsFeedNewsParams>(arguments, Self::CONTEXT) {
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
            input_schema: cached_schema_for_type::<GetAwsFeedNewsParams>(),
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
    use crate::domains::news::{FeedEnvelope, feed::tests::rss_document, mock_client};
    use crate::domains::tools::definitions::common::result_text;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn serve_feed(body: String) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_params_defaults() {
        let params: GetAwsFeedNewsParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.max_articles, 10);
        assert_eq!(params.search_keywords, None);
    }

    #[tokio::test]
    async fn test_keyword_filter() {
        let server = serve_feed(rss_document(&[
            ("New Lambda Feature", "Serverless", &[]),
            ("Amazon EC2 instance", "Compute", &[]),
        ]))
        .await;
        let client = mock_client(&server);

        let result = GetAwsFeedNewsTool::call(json!({ "search_keywords": "lambda" }), &client).await;
        let envelope: FeedEnvelope = serde_json::from_str(result_text(&result)).unwrap();

        assert_eq!(envelope.source, "AWS What's New Feed");
        assert_eq!(envelope.total_articles_returned, 1);
        assert_eq!(envelope.articles[0].title, "New Lambda Feature");
        assert_eq!(envelope.search_keywords.as_deref(), Some("lambda"));
    }

    #[tokio::test]
    async fn test_max_articles() {
        let server = serve_feed(rss_document(&[
            ("a", "", &[]),
            ("b", "", &[]),
            ("c", "", &[]),
            ("d", "", &[]),
            ("e", "", &[]),
        ]))
        .await;
        let client = mock_client(&server);

        let result = GetAwsFeedNewsTool::call(json!({ "max_articles": 3 }), &client).await;
        let value: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();

        assert_eq!(value["total_articles_returned"], 3);
        assert!(value["search_keywords"].is_null());
        assert_eq!(value["articles"][2]["title"], "c");
    }

    #[tokio::test]
    async fn test_malformed_feed() {
        let server = serve_feed("<<<definitely not rss".to_string()).await;
        let client = mock_client(&server);

        let result = GetAwsFeedNewsTool::call(json!({}), &client).await;
        let text = result_text(&result);

        assert_eq!(result.is_error, Some(true));
        assert!(text.starts_with("Error parsing RSS feed"));
        assert!(!text.contains("articles"));
    }

    #[tokio::test]
    async fn test_unreachable_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let client = mock_client(&server);

        let result = GetAwsFeedNewsTool::call(json!({}), &client).await;
        assert!(result_text(&result).starts_with("Error fetching AWS feed: HTTP status 503"));
    }
}
