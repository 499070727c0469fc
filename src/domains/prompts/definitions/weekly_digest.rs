//! Weekly digest prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::{PromptDefinition, SERVICE_DESCRIPTION};
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{
    PromptArguments, ToolCall, optional_arg, required_arg, since_days_ago,
};
use crate::domains::tools::definitions::GetAwsNewsTool;

/// Digest over the last `weeks` weeks.
pub fn weekly_digest(service: &str, weeks: u32, now: DateTime<Utc>) -> String {
    let days = weeks.saturating_mul(7);
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .text("news_type", "all")
        .text("since_date", since_days_ago(now, days))
        .number("number_of_results", 50)
        .to_string()
}

pub struct WeeklyDigestPrompt;

impl PromptDefinition for WeeklyDigestPrompt {
    const NAME: &'static str = "aws_weekly_digest";
    const DESCRIPTION: &'static str = "Get a weekly digest of AWS updates, \
        e.g. \"What happened with S3 in the last 2 weeks?\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("service", SERVICE_DESCRIPTION),
            optional_arg("weeks", "Number of weeks to look back (default: 1)"),
        ]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        let service = args.required("service")?;
        let weeks = args.u32_or("weeks", 1)?;
        Ok(weekly_digest(service, weeks, now))
    }
}
