//! Comprehensive search prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::{PromptDefinition, SERVICE_DESCRIPTION};
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{
    PromptArguments, ToolCall, optional_arg, required_arg, since_days_ago,
};
use crate::domains::tools::definitions::GetAwsNewsTool;

pub fn comprehensive_search(
    service: &str,
    days: u32,
    include_regional: bool,
    now: DateTime<Utc>,
) -> String {
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .text("news_type", "all")
        .text("since_date", since_days_ago(now, days))
        .flag("include_regional_expansions", include_regional)
        .number("number_of_results", 100)
        .to_string()
}

/// Broad research across all AWS content.
pub struct ComprehensiveSearchPrompt;

impl PromptDefinition for ComprehensiveSearchPrompt {
    const NAME: &'static str = "aws_comprehensive_search";
    const DESCRIPTION: &'static str = "Comprehensive search across all AWS content, \
        e.g. \"Everything about Lambda in the last 3 months\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("service", SERVICE_DESCRIPTION),
            optional_arg("days", "Number of days to look back (default: 90)"),
            optional_arg(
                "include_regional",
                "Include regional expansions (default: false)",
            ),
        ]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        let service = args.required("service")?;
        let days = args.u32_or("days", 90)?;
        let include_regional = args.bool_or("include_regional", false)?;
        Ok(comprehensive_search(service, days, include_regional, now))
    }
}
