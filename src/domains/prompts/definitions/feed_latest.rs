//! Latest feed prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{PromptArguments, ToolCall};
use crate::domains::tools::definitions::GetAwsFeedNewsTool;

pub fn feed_latest() -> String {
    ToolCall::new(GetAwsFeedNewsTool::NAME)
        .number("max_articles", 5)
        .to_string()
}

/// The handful of newest entries from the What's New feed.
pub struct FeedLatestPrompt;

impl PromptDefinition for FeedLatestPrompt {
    const NAME: &'static str = "aws_feed_latest";
    const DESCRIPTION: &'static str =
        "Get the very latest announcements straight from the AWS What's New RSS feed.";

    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }

    fn render(_args: &PromptArguments<'_>, _now: DateTime<Utc>) -> Result<String, PromptError> {
        Ok(feed_latest())
    }
}
