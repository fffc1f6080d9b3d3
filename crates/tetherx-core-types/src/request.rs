//! Request and response model for handle routing
//!
//! These types describe the addressed-request surface that handles and
//! router capabilities exchange. They carry no transport semantics of
//! their own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Well-known status codes
pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

// Well-known mime types
pub const MIME_TEXT_PLAIN: &str = "text/plain";
pub const MIME_APPLICATION_JSON: &str = "application/json";

/// A request addressed at a handle's referenced value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetherRequest {
    /// Target URL, relative to the handle the request is made against
    pub url: String,

    /// Request headers, ordered so the serialized form is deterministic
    pub headers: BTreeMap<String, String>,
}

impl TetherRequest {
    /// Create a request for the given URL with no headers
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Add a header to the request
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Look up a header value by key
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// Response produced by routing a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TetherResponse {
    /// Numeric status code (HTTP-style)
    pub status: u16,

    /// Mime type of the payload
    pub mime_type: String,

    /// Payload value
    pub value: serde_json::Value,
}

impl TetherResponse {
    /// Create a response with the given status, mime type, and payload
    pub fn new(status: u16, mime_type: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            status,
            mime_type: mime_type.into(),
            value,
        }
    }

    /// The canonical not-found response for an unroutable URL
    ///
    /// Synthesized when a request reaches a value that exposes no router
    /// capability. The URL is echoed in the plain-text body.
    pub fn not_found(url: &str) -> Self {
        Self {
            status: STATUS_NOT_FOUND,
            mime_type: MIME_TEXT_PLAIN.to_string(),
            value: serde_json::Value::String(format!("{url} not found")),
        }
    }

    /// Check whether the status code is in the success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
