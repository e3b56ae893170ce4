//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CENTAURO_API_URL, DEFAULT_NIKE_API_URL};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub integrations: IntegrationEndpoints,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

/// Base URLs of the backend integrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationEndpoints {
    pub nike_api_url: String,
    pub centauro_api_url: String,
}

impl Default for IntegrationEndpoints {
    fn default() -> Self {
        Self {
            nike_api_url: DEFAULT_NIKE_API_URL.to_string(),
            centauro_api_url: DEFAULT_CENTAURO_API_URL.to_string(),
        }
    }
}

/// Outgoing HTTP settings shared by every integration client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs(), user_agent: None }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Where the client-side session state lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { storage_path: default_storage_path() }
    }
}

fn default_storage_path() -> String {
    ".cargas/session.json".to_string()
}
