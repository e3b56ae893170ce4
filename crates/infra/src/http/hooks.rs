//! Request/response hooks for [`HttpClient`](super::HttpClient)
//!
//! Hooks run in registration order. Request hooks may rewrite the outgoing
//! request; response hooks observe the status and cannot change what the
//! caller receives.

use std::sync::Arc;

use async_trait::async_trait;
use cargas_core::{CredentialStore, LoginRedirect};
use cargas_domain::Result;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Request, StatusCode};
use tracing::{debug, error, warn};
use url::Url;

/// Runs before a request is sent.
#[async_trait]
pub trait RequestHook: Send + Sync {
    /// Mutate `request` before it goes on the wire.
    ///
    /// # Errors
    /// An error aborts the send and is returned to the caller unchanged.
    async fn on_request(&self, request: &mut Request) -> Result<()>;
}

/// What a response hook gets to see of a completed exchange.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// Method of the request.
    pub method: Method,
    /// Final request URL.
    pub url: Url,
    /// Response status.
    pub status: StatusCode,
}

/// Runs after a response arrives, before the caller reads it.
#[async_trait]
pub trait ResponseHook: Send + Sync {
    /// Inspect the response; hooks cannot fail the request.
    async fn on_response(&self, response: &ResponseMeta);
}

/// Attaches `Authorization: Bearer <token>` from the shared credential.
///
/// The token is read at send time, so a login or logout that happens after
/// the client was built is picked up by the next request.
pub struct BearerTokenHook {
    credentials: Arc<CredentialStore>,
}

impl BearerTokenHook {
    pub fn new(credentials: Arc<CredentialStore>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl RequestHook for BearerTokenHook {
    async fn on_request(&self, request: &mut Request) -> Result<()> {
        let Some(token) = self.credentials.token() else {
            debug!(url = %request.url(), "no stored token, sending unauthenticated");
            return Ok(());
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("stored token is not a valid header value, sending unauthenticated"),
        }
        Ok(())
    }
}

/// Tears the session down when any backend answers 401.
///
/// The credential is cleared and the operator is sent back to login. The
/// response itself still reaches the caller.
pub struct UnauthorizedHook {
    credentials: Arc<CredentialStore>,
    redirect: Arc<dyn LoginRedirect>,
}

impl UnauthorizedHook {
    pub fn new(credentials: Arc<CredentialStore>, redirect: Arc<dyn LoginRedirect>) -> Self {
        Self { credentials, redirect }
    }
}

#[async_trait]
impl ResponseHook for UnauthorizedHook {
    async fn on_response(&self, response: &ResponseMeta) {
        if response.status != StatusCode::UNAUTHORIZED {
            return;
        }

        warn!(method = %response.method, url = %response.url, "backend rejected token, ending session");
        if let Err(err) = self.credentials.clear() {
            error!(error = %err, "failed to clear credential after 401");
        }
        self.redirect.redirect_to_login();
    }
}
