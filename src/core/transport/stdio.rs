//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. The session ends when the
//! client closes stdin or when the process receives Ctrl-C.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                let reason = result.map_err(|e| TransportError::service(e.to_string()))?;
                info!("Session ended: {:?}", reason);
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Received Ctrl-C, shutting down");
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
