//! Outbound HTTP client for the news API and the What's New feed.

use reqwest::{Client, header::USER_AGENT};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::envelope::{FeedEnvelope, NewsEnvelope};
use super::error::NewsError;
use super::feed::{FeedRequest, parse_feed};
use super::query::{NewsQuery, QueryParams};
use crate::core::config::NewsConfig;

/// Client for the AWS news API and the What's New RSS feed.
///
/// Holds no per-call state; concurrent calls share the connection pool only.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    config: NewsConfig,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.config.feed_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs)
    }

    /// GET `url` and return the body, failing on non-2xx statuses.
    async fn get(&self, url: &str) -> Result<String, NewsError> {
        let secs = self.config.request_timeout_secs;
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| NewsError::from_reqwest(e, secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NewsError::from_reqwest(e, secs))?;

        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, url);
            return Err(NewsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Fetch articles from the news API and return the JSON body verbatim.
    pub async fn fetch_articles(&self, params: &QueryParams) -> Result<serde_json::Value, NewsError> {
        let url = format!("{}?{}", self.config.api_url, params.to_query_string()?);
        debug!("GET {}", url);

        let body = self.get(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Run a news query and wrap the result in an envelope.
    #[instrument(skip(self), fields(topic = %query.topic))]
    pub async fn search(&self, query: &NewsQuery) -> Result<NewsEnvelope, NewsError> {
        let params = query.build_params()?;
        let articles = self.fetch_articles(&params).await?;

        let envelope = NewsEnvelope::new(query, articles);
        info!(
            "Fetched {} article(s) for '{}'",
            envelope.article_count(),
            query.topic
        );
        Ok(envelope)
    }

    /// Fetch the RSS feed and select the requested entries.
    #[instrument(skip(self))]
    pub async fn latest_feed(&self, request: &FeedRequest) -> Result<FeedEnvelope, NewsError> {
        let document = self.get(&self.config.feed_url).await?;

        let parse_request = request.clone();
        let articles = tokio::task::spawn_blocking(move || {
            parse_feed(document.as_bytes(), &parse_request)
        })
        .await
        .map_err(|e| NewsError::unexpected(format!("Feed parsing task failed: {}", e)))??;

        info!("Selected {} feed article(s)", articles.len());
        Ok(FeedEnvelope::new(
            self.config.feed_url.clone(),
            request.search_keywords.clone(),
            articles,
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::news::feed::tests::rss_document;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param, query_param_is_missing},
    };

    /// Client pointed at a mock server serving `/articles` and `/feed`.
    pub(crate) fn mock_client(server: &MockServer) -> NewsClient {
        NewsClient::new(NewsConfig {
            api_url: format!("{}/articles", server.uri()),
            feed_url: format!("{}/feed", server.uri()),
            request_timeout_secs: 2,
            ..NewsConfig::default()
        })
    }

    #[tokio::test]
    async fn test_search_passes_body_through() {
        let server = MockServer::start().await;
        let body = json!({
            "articles": [{ "id": "test-id", "title": "Test Article", "type": "News" }],
            "pagination_token": "test-token"
        });

        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(query_param("page_size", "10"))
            .and(query_param("hide_regional_expansions", "true"))
            .and(query_param("search", "lambda"))
            .and(query_param("article_type", "news"))
            .and(query_param_is_missing("since"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let query = NewsQuery::new("lambda").with_news_type("news").with_limit(10);
        let envelope = client.search(&query).await.unwrap();

        assert_eq!(envelope.articles, body);
        assert_eq!(envelope.article_count(), 1);
        assert_eq!(envelope.news_type, "news");
    }

    #[tokio::test]
    async fn test_invalid_date_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let query = NewsQuery::new("lambda").with_since_date(Some("invalid-date".to_string()));
        let err = client.search(&query).await.unwrap_err();
        assert!(matches!(err, NewsError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.search(&NewsQuery::new("s3")).await.unwrap_err();
        match err {
            NewsError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.search(&NewsQuery::new("s3")).await.unwrap_err();
        assert!(matches!(err, NewsError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_user_agent_sent_on_every_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(header("user-agent", "news-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .and(header("user-agent", "news-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(rss_document(&[])))
            .expect(1)
            .mount(&server)
            .await;

        let client = NewsClient::new(NewsConfig {
            api_url: format!("{}/articles", server.uri()),
            feed_url: format!("{}/feed", server.uri()),
            user_agent: "news-test/1.0".to_string(),
            ..NewsConfig::default()
        });
        client.search(&NewsQuery::new("s3")).await.unwrap();
        client.latest_feed(&FeedRequest::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_timeout_is_http_class() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = NewsClient::new(NewsConfig {
            api_url: format!("{}/articles", server.uri()),
            request_timeout_secs: 1,
            ..NewsConfig::default()
        });
        let err = client.search(&NewsQuery::new("s3")).await.unwrap_err();
        assert!(matches!(err, NewsError::Timeout { seconds: 1 }));
        assert!(err.is_http());
    }

    #[tokio::test]
    async fn test_latest_feed() {
        let server = MockServer::start().await;
        let doc = rss_document(&[
            ("New Lambda Feature", "Faster cold starts", &["general:products/aws-lambda"]),
            ("Amazon S3 update", "Storage", &[]),
        ]);
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_string(doc))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let request = FeedRequest {
            max_articles: 10,
            search_keywords: Some("lambda".to_string()),
        };
        let envelope = client.latest_feed(&request).await.unwrap();

        assert_eq!(envelope.total_articles_returned, 1);
        assert_eq!(envelope.articles[0].title, "New Lambda Feature");
        assert_eq!(envelope.search_keywords.as_deref(), Some("lambda"));
        assert_eq!(envelope.feed_url, client.feed_url());
    }

    #[tokio::test]
    async fn test_latest_feed_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a feed"))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.latest_feed(&FeedRequest::default()).await.unwrap_err();
        assert!(matches!(err, NewsError::FeedParse(_)));
    }
}
