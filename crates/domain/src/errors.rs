//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Cargas
///
/// Variants mirror the failure taxonomy surfaced to the operator: each one
/// carries the human-readable message that should be shown next to the
/// control that triggered it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CargasError {
    /// Backend rejected the bearer token (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend refused the request (other 4xx); message is the server's.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Request never completed (connect, timeout, transport).
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a 5xx status.
    #[error("Server error: {0}")]
    Server(String),

    /// 2xx response whose body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request refused client-side before anything was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Login rejected by the auth provider.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CargasError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Network(_) => "network",
            Self::Server(_) => "server",
            Self::InvalidResponse(_) => "invalid_response",
            Self::InvalidInput(_) => "invalid_input",
            Self::Auth(_) => "auth",
            Self::Config(_) => "config",
            Self::Storage(_) => "storage",
            Self::Internal(_) => "internal",
        }
    }

    /// The message without the category prefix, for inline display.
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Network(msg)
            | Self::Server(msg)
            | Self::InvalidResponse(msg)
            | Self::InvalidInput(msg)
            | Self::Auth(msg)
            | Self::Config(msg)
            | Self::Storage(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Whether this failure tears down the shared session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Result type alias for Cargas operations
pub type Result<T> = std::result::Result<T, CargasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(CargasError::Unauthorized("x".into()).label(), "unauthorized");
        assert_eq!(CargasError::NotFound("x".into()).label(), "not_found");
        assert_eq!(CargasError::Validation("x".into()).label(), "validation");
        assert_eq!(CargasError::Network("x".into()).label(), "network");
    }

    #[test]
    fn message_strips_category_prefix() {
        let err = CargasError::Validation("status transition not allowed".into());
        assert_eq!(err.message(), "status transition not allowed");
        assert_eq!(err.to_string(), "Validation failed: status transition not allowed");
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = CargasError::NotFound("carga 42".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "carga 42");
    }
}
