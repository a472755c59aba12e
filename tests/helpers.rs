//! Shared test helpers for the Aladhan tool tests.

#![allow(dead_code)]

use aladhan_mcp_server::core::{Config, McpServer, config::AladhanConfig};
use rmcp::model::JsonObject;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Server configuration pointing the Aladhan client at `mock`.
pub fn mock_config(mock: &MockServer) -> Config {
    let mut config = Config::default();
    config.aladhan = AladhanConfig {
        base_url: mock.uri(),
        timeout_secs: 1,
    };
    config
}

/// An MCP server whose Aladhan client talks to `mock`.
pub fn mock_server(mock: &MockServer) -> McpServer {
    McpServer::new(mock_config(mock)).expect("server should start")
}

/// Convert a JSON object literal into tool arguments.
pub fn args(value: Value) -> JsonObject {
    value
        .as_object()
        .cloned()
        .expect("arguments must be a JSON object")
}

/// Parse a tool's JSON text.
pub fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("tool output should be JSON")
}

/// The `error` message of a failed tool call, if any.
pub fn error_message(text: &str) -> Option<String> {
    parse(text)
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Wrap `data` in the Aladhan success envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "code": 200, "status": "OK", "data": data })
}

/// A realistic daily timings payload for London, 15 Jan 2025.
pub fn london_timings() -> Value {
    envelope(json!({
        "timings": {
            "Fajr": "06:12",
            "Sunrise": "07:58",
            "Dhuhr": "12:15",
            "Asr": "14:06",
            "Sunset": "16:23",
            "Maghrib": "16:23",
            "Isha": "18:03",
            "Imsak": "06:02",
            "Midnight": "00:15",
            "Firstthird": "21:31",
            "Lastthird": "02:59"
        },
        "date": {
            "readable": "15 Jan 2025",
            "gregorian": { "date": "15-01-2025" },
            "hijri": { "date": "15-07-1446" }
        },
        "meta": {
            "timezone": "Europe/London",
            "method": { "id": 3, "name": "Muslim World League" },
            "school": "STANDARD"
        }
    }))
}
