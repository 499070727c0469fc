//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.
//!
//! Each tool knows how to create its own route; they all share one
//! [`NewsClient`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::news::NewsClient;

use super::definitions::{
    GetAwsAnnouncementsTool, GetAwsBlogsTool, GetAwsFeedNewsTool, GetAwsNewsTool,
    GetAwsRegionalExpansionsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<NewsClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetAwsNewsTool::create_route(client.clone()))
        .with_route(GetAwsAnnouncementsTool::create_route(client.clone()))
        .with_route(GetAwsBlogsTool::create_route(client.clone()))
        .with_route(GetAwsRegionalExpansionsTool::create_route(client.clone()))
        .with_route(GetAwsFeedNewsTool::create_route(client))
}
