//! Shared plumbing for the Aladhan-backed tools.
//!
//! - `validation`: argument checks run before any request is built
//! - `query`: endpoint path + ordered query parameters
//! - `client`: the outbound HTTP call
//! - `response`: envelope unwrapping and `{"error": ...}` formatting

pub mod client;
pub mod query;
pub mod response;
pub mod validation;

pub use client::AladhanClient;
pub use query::ApiQuery;

/// Public Aladhan API base URL.
pub const ALADHAN_BASE_URL: &str = "https://api.aladhan.com/v1";
