//! Regional expansions prompt definition.

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{PromptArguments, ToolCall, optional_arg, since_days_ago};
use crate::domains::tools::definitions::GetAwsNewsTool;

pub fn regional_expansions(service: &str, days: u32, now: DateTime<Utc>) -> String {
    ToolCall::new(GetAwsNewsTool::NAME)
        .text("topic", service)
        .flag("include_regional_expansions", true)
        .text("since_date", since_days_ago(now, days))
        .number("number_of_results", 40)
        .to_string()
}

/// Announcements of services reaching new regions.
pub struct RegionalExpansionsPrompt;

impl PromptDefinition for RegionalExpansionsPrompt {
    const NAME: &'static str = "aws_regional_expansions";
    const DESCRIPTION: &'static str = "Find AWS regional expansion announcements, \
        e.g. \"Where is Lambda now available?\" or \"New regions for RDS\".";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            optional_arg(
                "service",
                "AWS service name or 'aws' for all services (default: 'aws')",
            ),
            optional_arg("days", "Number of days to look back (default: 90)"),
        ]
    }

    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError> {
        let service = args.string_or("service", "aws");
        let days = args.u32_or("days", 90)?;
        Ok(regional_expansions(service, days, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::definitions::test_now;
    use std::collections::HashMap;

    #[test]
    fn test_regional_expansions_defaults() {
        let values = HashMap::new();
        let text = RegionalExpansionsPrompt::render(&PromptArguments::new(&values), test_now())
            .unwrap();
        assert_eq!(
            text,
            "Call get_aws_news with: topic='aws', include_regional_expansions=true, since_date='2025-03-02T08:30:15Z', number_of_results=40"
        );
    }
}
