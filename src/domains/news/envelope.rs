//! Result envelopes returned by the news tools.

use serde::{Deserialize, Serialize};

use super::feed::FeedArticle;
use super::query::NewsQuery;

/// Source label carried by every feed envelope.
pub const FEED_SOURCE: &str = "AWS What's New Feed";

/// News API result with the request context echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEnvelope {
    pub topic: String,
    pub news_type: String,
    pub include_regional_expansions: bool,
    /// Verbatim response body of the news API.
    pub articles: serde_json::Value,
}

impl NewsEnvelope {
    pub fn new(query: &NewsQuery, articles: serde_json::Value) -> Self {
        Self {
            topic: query.topic.clone(),
            news_type: query.news_type.clone(),
            include_regional_expansions: query.include_regional_expansions,
            articles,
        }
    }

    /// Number of articles in the upstream payload.
    ///
    /// The API answers either with a bare array or with an object holding an
    /// `articles` array.
    pub fn article_count(&self) -> usize {
        match &self.articles {
            serde_json::Value::Array(items) => items.len(),
            serde_json::Value::Object(map) => map
                .get("articles")
                .and_then(|v| v.as_array())
                .map_or(0, Vec::len),
            _ => 0,
        }
    }
}

/// RSS feed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEnvelope {
    pub source: String,
    pub feed_url: String,
    pub total_articles_returned: usize,
    pub search_keywords: Option<String>,
    pub articles: Vec<FeedArticle>,
}

impl FeedEnvelope {
    pub fn new(
        feed_url: impl Into<String>,
        search_keywords: Option<String>,
        articles: Vec<FeedArticle>,
    ) -> Self {
        Self {
            source: FEED_SOURCE.to_string(),
            feed_url: feed_url.into(),
            total_articles_returned: articles.len(),
            search_keywords,
            articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_news_envelope_round_trip() {
        let query = NewsQuery::new("lambda")
            .with_news_type("News")
            .with_regional_expansions(true);
        let envelope = NewsEnvelope::new(
            &query,
            json!({ "articles": [{ "id": "a" }, { "id": "b" }], "pagination_token": "t" }),
        );

        let text = serde_json::to_string_pretty(&envelope).unwrap();
        let parsed: NewsEnvelope = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.topic, "lambda");
        assert_eq!(parsed.news_type, "News");
        assert!(parsed.include_regional_expansions);
        assert_eq!(parsed.article_count(), 2);
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn test_feed_envelope_counts_articles() {
        let articles = vec![FeedArticle {
            title: "New Lambda Feature".to_string(),
            description: String::new(),
            url: "https://aws.amazon.com/a".to_string(),
            published_date: String::new(),
            tags: None,
        }];
        let envelope = FeedEnvelope::new("https://example.com/feed", None, articles);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["source"], "AWS What's New Feed");
        assert_eq!(value["total_articles_returned"], 1);
        assert!(value["search_keywords"].is_null());
        assert!(value["articles"][0].get("tags").is_none());
    }
}
