//! Error shape for failed catalog requests.
//!
//! Every failure, whether a non-2xx status or a network-level error, becomes
//! an [`ApiError`]. The server's own `message` field is preferred when the
//! error body carries one; otherwise the operation's fallback text is used.

use std::fmt;

use serde::Deserialize;

use crate::error::CatalogError;

use super::RemoteOperation;

/// Error body the catalog server sends alongside a failing status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    /// Which request failed
    pub operation: RemoteOperation,
    /// HTTP status code, if a response was received
    pub status: Option<reqwest::StatusCode>,
    /// Server-supplied message, verbatim
    pub server_message: Option<String>,
    /// Low-level cause for logs (connection refused, timeout, ...)
    pub detail: Option<String>,
}

impl ApiError {
    /// Build an error from a failing response status and its raw body
    pub fn from_response(
        operation: RemoteOperation,
        status: reqwest::StatusCode,
        body: &str,
    ) -> Self {
        Self {
            operation,
            status: Some(status),
            server_message: server_message(body),
            detail: None,
        }
    }

    /// Build an error for a request that never produced a response
    pub fn transport(operation: RemoteOperation, source: &reqwest::Error) -> Self {
        Self {
            operation,
            status: source.status(),
            server_message: None,
            detail: Some(source.to_string()),
        }
    }

    /// The text to surface to the user
    pub fn message(&self) -> String {
        self.server_message
            .clone()
            .unwrap_or_else(|| self.operation.fallback_message().to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<ApiError> for CatalogError {
    fn from(error: ApiError) -> Self {
        CatalogError::Transport {
            operation: error.operation.to_string(),
            status: error.status.map(|s| s.as_u16()),
            message: error.message(),
        }
    }
}

/// Extract a non-empty `message` from a JSON error body
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
