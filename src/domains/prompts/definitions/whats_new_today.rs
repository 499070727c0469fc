//! What's new today prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{PromptArguments, ToolCall, optional_arg, start_of_day};
use crate::domains::tools::definitions::GetAwsNewsTool;

pub fn whats_new_today(service: &str, now: DateTime<Utc>) -> String {
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .text("news_type", "all")
        .text("since_date", start_of_day(now))
        .number("number_of_results", 20)
        .to_string()
}

pub struct WhatsNewTodayPrompt;

impl PromptDefinition for WhatsNewTodayPrompt {
    const NAME: &'static str = "aws_whats_new_today";
    const DESCRIPTION: &'static str = "What's new in AWS today, e.g. \"Today's Lambda announcements\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![optional_arg(
            "service",
            "AWS service name or 'aws' for everything (default: 'aws')",
        )]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        Ok(whats_new_today(args.string_or("service", "aws"), now))
    }
}
