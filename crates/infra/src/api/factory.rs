//! Memoizing factory for per-integration API clients

use std::sync::Arc;
use std::time::Duration;

use cargas_core::{CredentialStore, LoginRedirect};
use cargas_domain::{HttpSettings, IntegrationConfig, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use super::client::ApiClient;
use crate::http::{BearerTokenHook, HttpClient, UnauthorizedHook};

/// Builds at most one [`ApiClient`] per integration id.
///
/// Every client shares the same hook chain: the bearer token is read from
/// the shared credential at send time, and a 401 from any backend ends the
/// session.
pub struct ApiClientFactory {
    settings: HttpSettings,
    credentials: Arc<CredentialStore>,
    redirect: Arc<dyn LoginRedirect>,
    clients: DashMap<String, Arc<ApiClient>>,
}

impl ApiClientFactory {
    pub fn new(
        settings: HttpSettings,
        credentials: Arc<CredentialStore>,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Self {
        Self { settings, credentials, redirect, clients: DashMap::new() }
    }

    /// Client for `integration`, built on first use and reused afterwards.
    ///
    /// # Errors
    /// Returns `CargasError::Internal` if the underlying HTTP client cannot be
    /// built.
    pub fn client_for(&self, integration: &IntegrationConfig) -> Result<Arc<ApiClient>> {
        match self.clients.entry(integration.id.clone()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let client = Arc::new(self.build(integration)?);
                debug!(integration = %integration.id, base_url = %client.base_url(), "api client created");
                Ok(Arc::clone(entry.insert(client).value()))
            }
        }
    }

    /// Drop every memoized client.
    pub fn reset(&self) {
        self.clients.clear();
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    fn build(&self, integration: &IntegrationConfig) -> Result<ApiClient> {
        let mut builder = HttpClient::builder()
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .request_hook(Arc::new(BearerTokenHook::new(Arc::clone(&self.credentials))))
            .response_hook(Arc::new(UnauthorizedHook::new(
                Arc::clone(&self.credentials),
                Arc::clone(&self.redirect),
            )));

        if let Some(agent) = &self.settings.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(ApiClient::new(Arc::new(integration.clone()), builder.build()?))
    }
}

#[cfg(test)]
mod tests {
    use cargas_core::{IntegrationRegistry, MemorySessionStorage};
    use cargas_domain::constants::{INTEGRATION_CENTAURO, INTEGRATION_NIKE};
    use cargas_domain::IntegrationEndpoints;

    use super::*;
    use crate::http::RecordingRedirect;

    fn factory() -> ApiClientFactory {
        let credentials = Arc::new(CredentialStore::new(Arc::new(MemorySessionStorage::new())));
        ApiClientFactory::new(
            HttpSettings::default(),
            credentials,
            Arc::new(RecordingRedirect::new()),
        )
    }

    #[test]
    fn same_id_returns_same_client() {
        let registry = IntegrationRegistry::builtin(&IntegrationEndpoints::default()).unwrap();
        let factory = factory();

        let first = factory.client_for(&registry.get(INTEGRATION_NIKE)).unwrap();
        let second = factory.client_for(&registry.get(INTEGRATION_NIKE)).unwrap();
        let other = factory.client_for(&registry.get(INTEGRATION_CENTAURO)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn clients_use_integration_api_root() {
        let registry = IntegrationRegistry::builtin(&IntegrationEndpoints::default()).unwrap();
        let factory = factory();

        let centauro = factory.client_for(&registry.get(INTEGRATION_CENTAURO)).unwrap();

        assert_eq!(centauro.base_url(), "http://localhost:8001/api/v2");
        assert_eq!(centauro.integration().id, INTEGRATION_CENTAURO);
    }

    #[test]
    fn reset_forgets_clients() {
        let registry = IntegrationRegistry::builtin(&IntegrationEndpoints::default()).unwrap();
        let factory = factory();
        let before = factory.client_for(&registry.get(INTEGRATION_NIKE)).unwrap();

        factory.reset();
        assert!(factory.is_empty());

        let after = factory.client_for(&registry.get(INTEGRATION_NIKE)).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }
}
