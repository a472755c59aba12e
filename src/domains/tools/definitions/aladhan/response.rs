//! Response shaping and formatting.
//!
//! Aladhan wraps payloads as `{"code": 200, "status": "OK", "data": ...}`.
//! Tools return the `data` member as-is, and every outcome, good or bad,
//! leaves this module as a JSON string.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};
use tracing::warn;

use crate::domains::tools::ToolError;

/// The `data` member of an Aladhan envelope.
///
/// Falls back to the whole payload when `data` is missing, null, or an
/// empty array/object.
pub fn unwrap_data(payload: Value) -> Value {
    match payload.get("data") {
        Some(data) if !is_empty(data) => data.clone(),
        _ => payload,
    }
}

/// The value at a JSON pointer inside `payload`, if present and non-empty.
pub fn pluck(payload: &Value, pointer: &str) -> Option<Value> {
    payload
        .pointer(pointer)
        .filter(|value| !is_empty(value))
        .cloned()
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// `{"error": "<message>"}` for any tool failure.
pub fn error_json(error: &ToolError) -> String {
    json!({ "error": error.to_string() }).to_string()
}

/// Render an outcome as the JSON string handed back to the caller.
pub fn render(outcome: &Result<Value, ToolError>) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(error) => error_json(error),
    }
}

/// Wrap an outcome as an MCP tool result with a single text item.
pub fn call_result(tool: &str, outcome: Result<Value, ToolError>) -> CallToolResult {
    let text = render(&outcome);
    match outcome {
        Ok(_) => CallToolResult::success(vec![Content::text(text)]),
        Err(error) => {
            warn!("Tool {} failed: {}", tool, error);
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}
