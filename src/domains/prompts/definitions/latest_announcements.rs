//! Latest announcements prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::{PromptDefinition, SERVICE_DESCRIPTION};
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{
    PromptArguments, ToolCall, optional_arg, required_arg, since_days_ago,
};
use crate::domains::tools::definitions::GetAwsNewsTool;

pub fn latest_announcements(service: &str, days: u32, now: DateTime<Utc>) -> String {
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .text("news_type", "news")
        .text("since_date", since_days_ago(now, days))
        .number("number_of_results", 40)
        .to_string()
}

/// Only official AWS news announcements for a service.
pub struct LatestAnnouncementsPrompt;

impl PromptDefinition for LatestAnnouncementsPrompt {
    const NAME: &'static str = "aws_latest_announcements";
    const DESCRIPTION: &'static str = "Get only official AWS news announcements for any service, \
        e.g. \"Latest Lambda announcements\" or \"What new features were announced for S3?\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("service", SERVICE_DESCRIPTION),
            optional_arg("days", "Number of days to look back (default: 30)"),
        ]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        let service = args.required("service")?;
        let days = args.u32_or("days", 30)?;
        Ok(latest_announcements(service, days, now))
    }
}
