//! Integration configuration types

use serde::{Deserialize, Serialize};

/// Static description of one backend integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub api_base_url: String,
    /// Path prepended to every endpoint (e.g. "/api/v2"); may be empty.
    pub api_path_prefix: String,
    /// Whether this integration issues the shared bearer token.
    pub is_auth_provider: bool,
    pub features: IntegrationFeatures,
}

/// Operations an integration's backend supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationFeatures {
    pub document_upload: bool,
    pub status_update: bool,
    pub tracking: bool,
}

impl Default for IntegrationFeatures {
    fn default() -> Self {
        Self { document_upload: true, status_update: true, tracking: true }
    }
}

impl IntegrationConfig {
    /// Base URL joined with the path prefix, without a trailing slash.
    pub fn api_root(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let prefix = self.api_path_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else if prefix.starts_with('/') {
            format!("{base}{prefix}")
        } else {
            format!("{base}/{prefix}")
        }
    }
}
