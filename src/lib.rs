//! Aladhan MCP Server Library
//!
//! An MCP server exposing the Aladhan prayer-times API as tools: daily
//! prayer times, the next prayer, qibla direction, Hijri/Gregorian date
//! conversion, monthly calendars and the list of calculation methods.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the Aladhan-backed MCP tools
//!
//! # Example
//!
//! ```rust,no_run
//! use aladhan_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
