//! AWS What's New RSS feed parsing and filtering.

use rss::{Channel, Item};
use serde::{Deserialize, Serialize};

use super::error::NewsError;

/// Default number of feed articles returned.
pub const DEFAULT_MAX_ARTICLES: u32 = 10;

/// One entry of the What's New feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl FeedArticle {
    fn from_item(item: &Item) -> Self {
        let tags = if item.categories().is_empty() {
            None
        } else {
            Some(
                item.categories()
                    .iter()
                    .map(|category| category.name().to_string())
                    .collect(),
            )
        };

        Self {
            title: item.title().unwrap_or_default().to_string(),
            description: item.description().unwrap_or_default().to_string(),
            url: item.link().unwrap_or_default().to_string(),
            published_date: item.pub_date().unwrap_or_default().to_string(),
            tags,
        }
    }
}

/// Arguments of a feed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub max_articles: u32,
    pub search_keywords: Option<String>,
}

impl Default for FeedRequest {
    fn default() -> Self {
        Self {
            max_articles: DEFAULT_MAX_ARTICLES,
            search_keywords: None,
        }
    }
}

impl FeedRequest {
    /// Lowercased keyword filter, `None` when absent or empty.
    fn keyword(&self) -> Option<String> {
        self.search_keywords
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
    }
}

/// Parse an RSS document and select the matching entries.
pub fn parse_feed(document: &[u8], request: &FeedRequest) -> Result<Vec<FeedArticle>, NewsError> {
    let channel = Channel::read_from(document).map_err(|e| NewsError::FeedParse(e.to_string()))?;
    Ok(select_articles(channel.items(), request))
}

/// Walk `items` in document order, keeping those that match the keyword.
///
/// The scan halts once `max_articles` entries have been accepted; later
/// entries are never inspected.
pub fn select_articles(items: &[Item], request: &FeedRequest) -> Vec<FeedArticle> {
    let limit = request.max_articles as usize;
    let keyword = request.keyword();
    let mut articles = Vec::with_capacity(limit.min(items.len()));

    for item in items {
        if articles.len() >= limit {
            break;
        }

        if let Some(keyword) = &keyword {
            let title = item.title().unwrap_or_default().to_lowercase();
            let description = item.description().unwrap_or_default().to_lowercase();
            if !title.contains(keyword) && !description.contains(keyword) {
                continue;
            }
        }

        articles.push(FeedArticle::from_item(item));
    }

    articles
}
