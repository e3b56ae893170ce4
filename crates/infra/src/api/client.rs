//! Per-integration API client
//!
//! Wraps an [`HttpClient`] bound to one integration's API root and turns
//! backend responses into typed results or [`CargasError`]s.

use std::sync::Arc;

use cargas_domain::constants::GENERIC_REQUEST_FAILED_MESSAGE;
use cargas_domain::{CargasError, IntegrationConfig, Result};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

/// Fields checked, in order, for a human-readable message in error bodies.
const MESSAGE_FIELDS: [&str; 3] = ["msg", "detail", "mensagem"];

/// HTTP client for one integration.
pub struct ApiClient {
    integration: Arc<IntegrationConfig>,
    base_url: String,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(integration: Arc<IntegrationConfig>, http: HttpClient) -> Self {
        let base_url = integration.api_root();
        Self { integration, base_url, http }
    }

    pub fn integration(&self) -> &IntegrationConfig {
        &self.integration
    }

    /// API root every path is appended to (base URL plus prefix).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` under the API root.
    ///
    /// Each element is one percent-encoded path segment, so an id holding
    /// `/`, `?` or `#` stays inside its segment. A trailing `""` keeps the
    /// trailing slash (`["cargas", ""]` is `/cargas/`).
    ///
    /// # Errors
    /// Returns `CargasError::Internal` if the API root is not a base URL.
    pub fn url(&self, path: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|err| {
            CargasError::Internal(format!("invalid API root {}: {err}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| CargasError::Internal(format!("API root {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// # Errors
    /// See [`ApiClient::execute`].
    #[instrument(skip(self), fields(integration = %self.integration.id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let request = self.http.request(Method::GET, self.url(path)?);
        self.execute(request).await
    }

    /// Send `body` as a plain JSON document.
    ///
    /// # Errors
    /// See [`ApiClient::execute`].
    #[instrument(skip(self, body), fields(integration = %self.integration.id))]
    pub async fn post_json<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.http.request(Method::POST, self.url(path)?).json(body);
        self.execute(request).await
    }

    /// Send `form` as `multipart/form-data`.
    ///
    /// # Errors
    /// See [`ApiClient::execute`].
    #[instrument(skip(self, form), fields(integration = %self.integration.id))]
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &[&str], form: Form) -> Result<T> {
        let request = self.http.request(Method::POST, self.url(path)?).multipart(form);
        self.execute(request).await
    }

    /// # Errors
    /// See [`ApiClient::execute`].
    #[instrument(skip(self), fields(integration = %self.integration.id))]
    pub async fn delete(&self, path: &[&str]) -> Result<()> {
        let request = self.http.request(Method::DELETE, self.url(path)?);
        let _: Value = self.execute(request).await?;
        Ok(())
    }

    /// Send once and decode the body.
    ///
    /// An empty 2xx body decodes as JSON `null`.
    ///
    /// # Errors
    /// - Transport failures from [`HttpClient::send`]
    /// - `Unauthorized` (401), `NotFound` (404), `Validation` (other 4xx),
    ///   `Server` (5xx), carrying the server's message when one is present
    /// - `InvalidResponse` when a 2xx body does not decode into `T`
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.http.send(request).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            CargasError::Network(format!("failed to read response body: {err}"))
        })?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or(GENERIC_REQUEST_FAILED_MESSAGE).to_string()
            });
            debug!(%status, %message, "request rejected");
            return Err(map_status_error(status, message));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_value(Value::Null).map_err(|_| {
                CargasError::InvalidResponse(format!(
                    "empty response ({}) where a body was expected",
                    status.as_u16()
                ))
            });
        }

        serde_json::from_slice(&body)
            .map_err(|err| CargasError::InvalidResponse(format!("failed to parse response: {err}")))
    }
}

/// Map a non-2xx status to its error category.
pub fn map_status_error(status: StatusCode, message: String) -> CargasError {
    match status {
        StatusCode::UNAUTHORIZED => CargasError::Unauthorized(message),
        StatusCode::NOT_FOUND => CargasError::NotFound(message),
        status if status.is_client_error() => CargasError::Validation(message),
        status if status.is_server_error() => CargasError::Server(message),
        _ => CargasError::InvalidResponse(message),
    }
}

/// First non-empty message among `msg`, `detail` and `mensagem`.
///
/// Non-string values (validation error lists, nested objects) are rendered as
/// compact JSON.
pub fn error_message(body: &[u8]) -> Option<String> {
    let Value::Object(fields) = serde_json::from_slice::<Value>(body).ok()? else {
        return None;
    };

    MESSAGE_FIELDS.iter().find_map(|key| match fields.get(*key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::String(_) | Value::Null => None,
        other => Some(other.to_string()),
    })
}
