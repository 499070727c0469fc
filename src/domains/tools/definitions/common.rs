//! Common utilities shared across the news tools.
//!
//! Every tool answers with a single text block: the pretty-printed JSON
//! envelope on success, or an `Error ...` sentence flagged as a tool error.
//! Nothing raised below this layer reaches the transport.

use rmcp::model::{CallToolResult, Content};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domains::news::NewsError;

/// Create an error result with a formatted message.
pub fn error_result(message: String) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Collapse a typed outcome into the string handed back to the caller.
///
/// `Ok` carries the indented JSON envelope, `Err` the error sentence.
pub fn render_outcome<T: Serialize>(
    context: &str,
    outcome: Result<T, NewsError>,
) -> Result<String, String> {
    match outcome {
        Ok(envelope) => serde_json::to_string_pretty(&envelope)
            .map_err(|e| NewsError::unexpected(e.to_string()).render(context)),
        Err(e) => Err(e.render(context)),
    }
}

/// Wrap a typed outcome as an MCP tool result.
pub fn tool_result<T: Serialize>(context: &str, outcome: Result<T, NewsError>) -> CallToolResult {
    match render_outcome(context, outcome) {
        Ok(json) => success_result(json),
        Err(message) => error_result(message),
    }
}

/// Deserialize tool arguments, reporting failures as an error sentence.
pub fn parse_arguments<P: DeserializeOwned>(
    arguments: serde_json::Value,
    context: &str,
) -> Result<P, String> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| format!("Error {}: invalid arguments: {}", context, e))
}

/// Serialize a tool result for the HTTP transport.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Text of the first content block of a tool result.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
