//! Prompt templates module.
//!
//! This module contains the [`PromptTemplate`] registered with the prompt
//! service, the argument accessors used by prompt definitions, and the
//! helpers that format lookback timestamps and tool-call instructions.

use chrono::{DateTime, TimeDelta, Utc};
use rmcp::model::PromptArgument;
use std::collections::HashMap;
use std::fmt;

use super::error::PromptError;

/// Timestamp format understood by the news tools' `since_date` argument.
pub const SINCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders a prompt from its raw arguments at a given instant.
pub type RenderFn = fn(&PromptArguments, DateTime<Utc>) -> Result<String, PromptError>;

/// A registered prompt: metadata plus the function that renders it.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    renderer: RenderFn,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        renderer: RenderFn,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            renderer,
        }
    }

    /// Render the template with the given arguments.
    pub fn render(
        &self,
        arguments: &HashMap<String, String>,
        now: DateTime<Utc>,
    ) -> Result<String, PromptError> {
        (self.renderer)(&PromptArguments::new(arguments), now)
    }
}

/// Typed access to the string arguments of a prompt request.
pub struct PromptArguments<'a> {
    values: &'a HashMap<String, String>,
}

impl<'a> PromptArguments<'a> {
    pub fn new(values: &'a HashMap<String, String>) -> Self {
        Self { values }
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// A required string argument.
    pub fn required(&self, name: &str) -> Result<&'a str, PromptError> {
        self.get(name)
            .ok_or_else(|| PromptError::missing_argument(name))
    }

    /// An optional string argument with a default.
    pub fn string_or(&self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// An optional non-negative integer argument with a default.
    pub fn u32_or(&self, name: &str, default: u32) -> Result<u32, PromptError> {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| {
                PromptError::invalid_argument(name, format!("expected a non-negative integer, got '{}'", raw))
            }),
        }
    }

    /// An optional boolean argument with a default.
    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, PromptError> {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => crate::core::config::parse_flag(raw).ok_or_else(|| {
                PromptError::invalid_argument(name, format!("expected true or false, got '{}'", raw))
            }),
        }
    }
}

/// Build a required prompt argument.
pub fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

/// Build an optional prompt argument.
pub fn optional_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}

/// `now` minus `days`, formatted for `since_date`.
///
/// Saturates at the earliest representable instant instead of failing.
pub fn since_days_ago(now: DateTime<Utc>, days: u32) -> String {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .format(SINCE_FORMAT)
        .to_string()
}

/// Midnight UTC of the day containing `now`, formatted for `since_date`.
pub fn start_of_day(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT00:00:00Z").to_string()
}

enum CallValue {
    Text(String),
    Literal(String),
}

/// An instruction telling the agent which tool to call with which values.
///
/// Strings render quoted (`topic='lambda'`), numbers and booleans bare
/// (`number_of_results=40`, `include_regional_expansions=true`).
pub struct ToolCall {
    tool: &'static str,
    args: Vec<(&'static str, CallValue)>,
}

impl ToolCall {
    pub fn new(tool: &'static str) -> Self {
        Self {
            tool,
            args: Vec::new(),
        }
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, CallValue::Text(value.into())));
        self
    }

    pub fn number(mut self, name: &'static str, value: u32) -> Self {
        self.args.push((name, CallValue::Literal(value.to_string())));
        self
    }

    pub fn flag(mut self, name: &'static str, value: bool) -> Self {
        self.args.push((name, CallValue::Literal(value.to_string())));
        self
    }
}

impl fmt::Display for ToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call {} with: ", self.tool)?;
        for (i, (name, value)) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                CallValue::Text(v) => write!(f, "{}='{}'", name, v)?,
                CallValue::Literal(v) => write!(f, "{}={}", name, v)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_tool_call_formatting() {
        let call = ToolCall::new("get_aws_news")
            .text("topic", "lambda")
            .flag("include_regional_expansions", false)
            .number("number_of_results", 40);
        assert_eq!(
            call.to_string(),
            "Call get_aws_news with: topic='lambda', include_regional_expansions=false, number_of_results=40"
        );
    }

    #[test]
    fn test_since_days_ago() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 4, 5).unwrap();
        assert_eq!(since_days_ago(now, 0), "2025-03-10T15:04:05Z");
        assert_eq!(since_days_ago(now, 10), "2025-02-28T15:04:05Z");
        assert_eq!(start_of_day(now), "2025-03-10T00:00:00Z");
    }

    #[test]
    fn test_since_days_ago_saturates() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let expected = DateTime::<Utc>::MIN_UTC.format(SINCE_FORMAT).to_string();
        assert_eq!(since_days_ago(now, u32::MAX), expected);
    }

    #[test]
    fn test_argument_accessors() {
        let values = args(&[("service", " s3 "), ("days", "7"), ("flag", "TRUE"), ("empty", "")]);
        let args = PromptArguments::new(&values);

        assert_eq!(args.required("service").unwrap(), "s3");
        assert!(matches!(
            args.required("empty"),
            Err(PromptError::MissingArgument(_))
        ));
        assert_eq!(args.string_or("missing", "aws"), "aws");
        assert_eq!(args.u32_or("days", 30).unwrap(), 7);
        assert_eq!(args.u32_or("missing", 30).unwrap(), 30);
        assert!(args.bool_or("flag", false).unwrap());
    }

    #[test]
    fn test_invalid_argument_values() {
        let values = args(&[("days", "-3"), ("flag", "perhaps")]);
        let args = PromptArguments::new(&values);

        assert!(matches!(
            args.u32_or("days", 30),
            Err(PromptError::InvalidArgument(..))
        ));
        assert!(matches!(
            args.bool_or("flag", false),
            Err(PromptError::InvalidArgument(..))
        ));
    }
}
