//! STDIO transport implementation.
//!
//! The default transport: one MCP session over stdin/stdout. Logs go to
//! stderr so they never interleave with protocol frames.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "{} ready on stdin/stdout (prompts {})",
            server.name(),
            if server.prompts_enabled() { "enabled" } else { "disabled" }
        );

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO session closed: {:?}", reason);
        Ok(())
    }
}
