//! Tool-specific error types.
//!
//! Every failure a tool call can hit maps onto one of these variants, and
//! every variant renders to the same `{"error": "..."}` payload.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// An argument was missing, mistyped or outside its domain.
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    /// The Aladhan API could not be reached (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The Aladhan API answered with a failure status or an unreadable body.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The client cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid argument" error for `field`.
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "missing argument" error for `field`.
    pub fn missing_argument(field: impl Into<String>) -> Self {
        Self::invalid_argument(field, "missing required argument")
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new upstream error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The offending field, for argument errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }
}
