//! Login and logout against the auth-provider integration

use std::sync::Arc;

use cargas_core::{Clock, CredentialStore, IntegrationRegistry, IntegrationSelection};
use cargas_domain::constants::{LOGIN_FAILED_MESSAGE, NETWORK_FAILURE_MESSAGE};
use cargas_domain::{CargasError, Credential, LoginData, LoginRequest, LoginResponse, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::api::ApiClientFactory;

const LOGIN_PATH: [&str; 1] = ["autenticacao"];

/// Naive timestamp layouts accepted for `expire_at`, read as UTC.
const NAIVE_EXPIRY_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Session lifecycle: one login shared by every integration.
pub struct AuthService {
    registry: Arc<IntegrationRegistry>,
    factory: Arc<ApiClientFactory>,
    credentials: Arc<CredentialStore>,
    selection: Arc<IntegrationSelection>,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(
        registry: Arc<IntegrationRegistry>,
        factory: Arc<ApiClientFactory>,
        credentials: Arc<CredentialStore>,
        selection: Arc<IntegrationSelection>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { registry, factory, credentials, selection, clock }
    }

    /// Exchange username and password for the shared credential and persist
    /// it.
    ///
    /// # Errors
    /// - `Network("unable to reach server")` when the request never completes
    /// - `Auth` with the server's message (or "login failed") when the login
    ///   is rejected, the envelope reports failure, or the expiry is unreadable
    /// - `Storage` when the credential cannot be persisted
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Credential> {
        let provider = self.registry.auth_provider();
        let client = self.factory.client_for(&provider)?;
        let request = LoginRequest { usuario: username.to_string(), senha: password.to_string() };

        let response: LoginResponse =
            client.post_json(&LOGIN_PATH, &request).await.map_err(login_error)?;

        let success = response.is_success();
        let (access_key, expire_at) = match response.data {
            Some(LoginData { access_key: Some(access_key), expire_at, .. })
                if success && !access_key.is_empty() =>
            {
                (access_key, expire_at.unwrap_or_default())
            }
            data => {
                let message = response
                    .message
                    .or_else(|| data.and_then(|data| data.message))
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
                warn!(username, %message, "login rejected");
                return Err(CargasError::Auth(message));
            }
        };

        let expires_at = parse_expiry(&expire_at)?;
        let credential = Credential::new(access_key, expires_at, username);
        self.credentials.save(&credential)?;

        info!(username, %expires_at, "logged in");
        Ok(credential)
    }

    /// Clear the credential and the selected integration, and drop every
    /// cached client. Logging out twice is harmless.
    ///
    /// # Errors
    /// Returns `CargasError::Storage` if session state cannot be removed.
    pub fn logout(&self) -> Result<()> {
        let username = self.credentials.username();
        self.credentials.clear()?;
        self.selection.reset()?;
        self.factory.reset();
        info!(username = username.as_deref().unwrap_or("-"), "logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated(self.clock.now())
    }

    /// Claims of the current token, for display only.
    pub fn decode_token_payload(&self) -> Option<Map<String, Value>> {
        self.credentials.decode_token_payload()
    }

    pub fn current_username(&self) -> Option<String> {
        self.credentials.username()
    }
}

fn login_error(err: CargasError) -> CargasError {
    match err {
        CargasError::Network(_) => CargasError::Network(NETWORK_FAILURE_MESSAGE.to_string()),
        CargasError::Unauthorized(message)
        | CargasError::NotFound(message)
        | CargasError::Validation(message)
        | CargasError::Server(message) => CargasError::Auth(message),
        CargasError::InvalidResponse(_) => CargasError::Auth(LOGIN_FAILED_MESSAGE.to_string()),
        other => other,
    }
}

/// Parse `expire_at` as RFC 3339, or as a naive ISO-8601 timestamp in UTC.
///
/// # Errors
/// Returns `CargasError::Auth` when neither layout matches.
pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_EXPIRY_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            warn!(expire_at = raw, "unreadable token expiry");
            CargasError::Auth(format!("invalid token expiry: {raw}"))
        })
}
