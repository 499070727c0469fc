//! Recent updates prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::{PromptDefinition, SERVICE_DESCRIPTION};
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{
    PromptArguments, ToolCall, optional_arg, required_arg, since_days_ago,
};
use crate::domains::tools::definitions::GetAwsNewsTool;

/// News and blogs for a service over the last `days` days.
pub fn recent_updates(service: &str, days: u32, now: DateTime<Utc>) -> String {
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .text("news_type", "all")
        .text("since_date", since_days_ago(now, days))
        .number("number_of_results", 40)
        .to_string()
}

/// Recent AWS updates (both news and blogs) for any service.
pub struct RecentUpdatesPrompt;

impl PromptDefinition for RecentUpdatesPrompt {
    const NAME: &'static str = "aws_recent_updates";
    const DESCRIPTION: &'static str = "Get recent AWS updates (both news and blogs) for any service. \
        Use this for general questions like \"What's new with Lambda?\" or \"Show me DynamoDB changes in the last 7 days\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("service", SERVICE_DESCRIPTION),
            optional_arg("days", "Number of days to look back (default: 30)"),
        ]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        let service = args.required("service")?;
        let days = args.u32_or("days", 30)?;
        Ok(recent_updates(service, days, now))
    }
}
