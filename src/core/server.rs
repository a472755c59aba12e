//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered once in `domains/tools/registry.rs`. The ToolRouter is
//! built from that table in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{
    ToolRegistry, build_tool_router, definitions::aladhan::AladhanClient,
};

const INSTRUCTIONS: &str = "Islamic prayer times, qibla direction, Hijri/Gregorian date \
     conversion and monthly prayer calendars, backed by the Aladhan API. \
     Daily tools take dates as DD-MM-YYYY (default today); \
     convert_gregorian_to_hijri takes YYYY-MM-DD. \
     Use list_calculation_methods to pick a `method` id. \
     Every tool returns JSON text; failures are returned as {\"error\": \"...\"}.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. All tool
/// calls share one Aladhan HTTP client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Direct dispatch over the tool table.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the configuration is unusable, the HTTP client cannot be
    /// built, or the tool table does not verify.
    pub fn new(config: Config) -> super::error::Result<Self> {
        config.validate()?;
        ToolRegistry::verify()?;

        let config = Arc::new(config);
        let client = Arc::new(AladhanClient::new(&config.aladhan)?);
        info!(
            "Aladhan client ready: {} (timeout {}s)",
            client.base_url(),
            client.timeout().as_secs()
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            registry: Arc::new(ToolRegistry::new(client)),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all available tools, as advertised to MCP clients.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name and return its JSON text.
    ///
    /// Unknown names and every failure come back as `{"error": "..."}`.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> String {
        self.registry.call_tool_text(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
