//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool wraps one Aladhan API endpoint: prayer times, qibla,
//! Hijri/Gregorian conversion and monthly calendars.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - `ToolDefinition` trait and the shared call pipeline
//! - `registry.rs` - Static tool table and direct dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` family
//! 2. Define the params struct and implement `ToolDefinition`
//! 3. Export it from the family's `mod.rs` and `definitions/mod.rs`
//! 4. Add one `ToolEntry::of::<MyTool>()` line to the registry table
//!
//! The router and the server pick the new tool up from the table.

pub mod definitions;
mod error;
pub mod handlers;
pub mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::ToolDefinition;
pub use registry::{ToolEntry, ToolRegistry};
pub use router::build_tool_router;
