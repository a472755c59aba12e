//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A static table of all available tools, built once on first use
//! - Direct dispatch of tool calls by name
//! - Tool metadata for listing

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use futures::{FutureExt, future::BoxFuture};
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::warn;

use super::ToolError;
use super::definitions::aladhan::{AladhanClient, response::render};
use super::definitions::{
    GregorianToHijriTool, HijriCalendarByCityTool, HijriCalendarTool, HijriToGregorianTool,
    ListCalculationMethodsTool, MonthlyCalendarByCityTool, MonthlyCalendarTool, NextPrayerTool,
    PrayerTimesByCityTool, PrayerTimesTool, QiblaTool,
};
use super::handlers::{ToolDefinition, execute};

/// Future returned by a bound tool function.
pub type ToolFuture = BoxFuture<'static, Result<Value, ToolError>>;

/// Validate, build, fetch and shape for one tool.
pub type ToolCall = fn(Arc<AladhanClient>, JsonObject) -> ToolFuture;

/// One registered tool: its MCP metadata and its bound call.
#[derive(Debug, Clone)]
pub struct ToolEntry {
    pub name: &'static str,
    pub tool: Tool,
    pub call: ToolCall,
}

impl ToolEntry {
    fn of<T: ToolDefinition>() -> Self {
        Self {
            name: T::NAME,
            tool: T::to_tool(),
            call: dispatch::<T>,
        }
    }
}

fn dispatch<T: ToolDefinition>(client: Arc<AladhanClient>, arguments: JsonObject) -> ToolFuture {
    async move { execute::<T>(&client, arguments).await }.boxed()
}

static TOOL_TABLE: LazyLock<Vec<ToolEntry>> = LazyLock::new(|| {
    vec![
        ToolEntry::of::<ListCalculationMethodsTool>(),
        ToolEntry::of::<GregorianToHijriTool>(),
        ToolEntry::of::<HijriToGregorianTool>(),
        ToolEntry::of::<PrayerTimesTool>(),
        ToolEntry::of::<PrayerTimesByCityTool>(),
        ToolEntry::of::<NextPrayerTool>(),
        ToolEntry::of::<QiblaTool>(),
        ToolEntry::of::<HijriCalendarTool>(),
        ToolEntry::of::<HijriCalendarByCityTool>(),
        ToolEntry::of::<MonthlyCalendarTool>(),
        ToolEntry::of::<MonthlyCalendarByCityTool>(),
    ]
});

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching tool calls against the shared Aladhan client
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: Arc<AladhanClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<AladhanClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<AladhanClient> {
        &self.client
    }

    /// All registered entries, in listing order.
    pub fn entries() -> &'static [ToolEntry] {
        &TOOL_TABLE
    }

    /// Look up an entry by tool name.
    pub fn find(name: &str) -> Option<&'static ToolEntry> {
        Self::entries().iter().find(|entry| entry.name == name)
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        Self::entries().iter().map(|entry| entry.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// The rmcp router is built from the same table.
    pub fn get_all_tools() -> Vec<Tool> {
        Self::entries().iter().map(|entry| entry.tool.clone()).collect()
    }

    /// Check the table: unique names, object input schemas.
    pub fn verify() -> Result<(), ToolError> {
        let mut seen = HashSet::new();
        for entry in Self::entries() {
            if !seen.insert(entry.name) {
                return Err(ToolError::internal(format!(
                    "Duplicate tool name: {}",
                    entry.name
                )));
            }
            if entry.tool.name != entry.name {
                return Err(ToolError::internal(format!(
                    "Tool {} is registered as {}",
                    entry.tool.name, entry.name
                )));
            }
            let schema_type = entry.tool.input_schema.get("type").and_then(Value::as_str);
            if schema_type != Some("object") {
                return Err(ToolError::internal(format!(
                    "Tool {} has a non-object input schema",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        match Self::find(name) {
            Some(entry) => (entry.call)(self.client.clone(), arguments).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }

    /// Dispatch a tool call and render the outcome as a JSON string.
    pub async fn call_tool_text(&self, name: &str, arguments: JsonObject) -> String {
        render(&self.call_tool(name, arguments).await)
    }
}
