//! Outbound HTTP client for the Aladhan API.
//!
//! One GET per tool call, bounded by the configured timeout, no retries.
//! Transport failures map to [`ToolError::Network`]; failure statuses and
//! unreadable bodies map to [`ToolError::Upstream`].

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::query::ApiQuery;
use crate::core::config::AladhanConfig;
use crate::domains::tools::ToolError;

/// Longest upstream body excerpt quoted in an error message.
const MAX_ERROR_EXCERPT: usize = 200;

/// Shared Aladhan client. Cheap to clone behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AladhanClient {
    /// Build the client once at start-up.
    pub fn new(config: &AladhanConfig) -> Result<Self, ToolError> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute `query` and return the decoded JSON body.
    #[instrument(skip(self, query), fields(path = %query.path()))]
    pub async fn get(&self, query: &ApiQuery) -> Result<Value, ToolError> {
        let url = format!("{}{}", self.base_url, query.path());
        debug!("GET {}?{}", url, query.encoded());

        let response = self
            .http
            .get(&url)
            .query(query.params())
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.network_error(e))?;
        debug!("Aladhan responded {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = describe_failure(status, &body);
            error!("Aladhan request failed: {}", message);
            return Err(ToolError::upstream(message));
        }

        serde_json::from_slice(&body).map_err(|e| {
            error!("Aladhan returned malformed JSON: {}", e);
            ToolError::upstream(format!("Malformed JSON from Aladhan API: {}", e))
        })
    }

    fn network_error(&self, e: reqwest::Error) -> ToolError {
        let message = if e.is_timeout() {
            format!("Request timed out after {}s", self.timeout.as_secs())
        } else if e.is_connect() {
            format!("Connection to Aladhan API failed: {}", e)
        } else {
            format!("Request to Aladhan API failed: {}", e)
        };
        error!("{}", message);
        ToolError::network(message)
    }
}

/// Human-readable summary of a failure response.
///
/// Aladhan error bodies look like `{"code":400,"status":"BAD_REQUEST","data":"..."}`;
/// the `data` string (or failing that, `status`) is the useful part.
fn describe_failure(status: StatusCode, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|payload| {
            ["data", "status"]
                .iter()
                .find_map(|key| payload.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .or_else(|| {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            (!text.is_empty()).then(|| text.chars().take(MAX_ERROR_EXCERPT).collect())
        });

    match detail {
        Some(detail) => format!("Aladhan API returned HTTP {}: {}", status, detail),
        None => format!("Aladhan API returned HTTP {}", status),
    }
}
