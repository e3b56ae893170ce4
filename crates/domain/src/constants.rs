//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Session storage keys (shared by every integration)
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_TOKEN_EXPIRATION: &str = "token_expiration";
pub const STORAGE_KEY_USERNAME: &str = "username";
pub const STORAGE_KEY_CURRENT_INTEGRATION: &str = "currentIntegration";

/// Keys removed together when the credential is invalidated.
pub const CREDENTIAL_KEYS: [&str; 3] =
    [STORAGE_KEY_TOKEN, STORAGE_KEY_TOKEN_EXPIRATION, STORAGE_KEY_USERNAME];

// Built-in integrations
pub const INTEGRATION_NIKE: &str = "nike";
pub const INTEGRATION_CENTAURO: &str = "centauro";
pub const DEFAULT_INTEGRATION: &str = INTEGRATION_NIKE;

// Default endpoints
pub const DEFAULT_NIKE_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_CENTAURO_API_URL: &str = "http://localhost:8001";
pub const CENTAURO_API_PREFIX: &str = "/api/v2";

// Documents
pub const DOCUMENT_EXTENSION: &str = ".xml";

// User-facing fallbacks
pub const UNKNOWN_STATUS_LABEL: &str = "Status Desconhecido";
pub const NETWORK_FAILURE_MESSAGE: &str = "unable to reach server";
pub const LOGIN_FAILED_MESSAGE: &str = "login failed";
pub const GENERIC_REQUEST_FAILED_MESSAGE: &str = "request failed";
