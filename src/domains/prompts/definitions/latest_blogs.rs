//! Latest blogs prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::{PromptDefinition, SERVICE_DESCRIPTION};
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{
    PromptArguments, ToolCall, optional_arg, required_arg, since_days_ago,
};
use crate::domains::tools::definitions::GetAwsNewsTool;

pub fn latest_blogs(service: &str, days: u32, now: DateTime<Utc>) -> String {
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .text("news_type", "blogs")
        .text("since_date", since_days_ago(now, days))
        .number("number_of_results", 40)
        .to_string()
}

/// Only AWS blog posts for a service.
pub struct LatestBlogsPrompt;

impl PromptDefinition for LatestBlogsPrompt {
    const NAME: &'static str = "aws_latest_blogs";
    const DESCRIPTION: &'static str = "Get only AWS blog posts for any service. \
        Use this when specifically asked for blogs, e.g. \"Lambda blogs from last 2 days\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("service", SERVICE_DESCRIPTION),
            optional_arg("days", "Number of days to look back (default: 14)"),
        ]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        let service = args.required("service")?;
        let days = args.u32_or("days", 14)?;
        Ok(latest_blogs(service, days, now))
    }
}
