//! Transport service - picks the transport the server is exposed on.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an [`McpServer`] on the configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Transport chosen by `MCP_TRANSPORT` and the `MCP_HTTP_*` variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve until the transport shuts down.
    ///
    /// STDIO returns when the client closes stdin; HTTP runs until the
    /// listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            "Serving {} tool(s) over {}",
            server.list_tools().len(),
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}
