//! Transport layer for the MCP server.
//!
//! The server is launched by an MCP client as a child process and speaks
//! JSON-RPC over its own stdin/stdout. It opens no network listener.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
