//! Application context wiring
//!
//! Builds every shared object once per process from the loaded
//! configuration. Nothing here is global; commands receive the context.

use std::sync::Arc;

use anyhow::bail;
use cargas_core::{
    CredentialStore, IntegrationRegistry, IntegrationSelection, SessionStorage, StatusVocabulary,
    SystemClock,
};
use cargas_domain::constants::INTEGRATION_CENTAURO;
use cargas_domain::{AppConfig, CargasError, IntegrationConfig, Result};
use cargas_infra::{
    ApiClientFactory, AuthService, CentauroShipmentService, FileSessionStorage,
    NikeShipmentService, RecordingRedirect,
};
use tracing::debug;

/// Which shipment service the selected integration maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Nike,
    Centauro,
}

pub struct AppContext {
    pub redirect: Arc<RecordingRedirect>,
    pub registry: Arc<IntegrationRegistry>,
    pub selection: Arc<IntegrationSelection>,
    pub auth: AuthService,
    pub nike: NikeShipmentService,
    pub centauro: CentauroShipmentService,
}

impl AppContext {
    /// Wire the context from `config`.
    ///
    /// # Errors
    /// Returns `CargasError::Config` when the integration registry cannot be
    /// built from the configured endpoints.
    pub fn new(config: &AppConfig) -> Result<Self> {
        debug!(session = %config.session.storage_path, "building application context");

        let storage: Arc<dyn SessionStorage> =
            Arc::new(FileSessionStorage::new(&config.session.storage_path));
        let credentials = Arc::new(CredentialStore::new(Arc::clone(&storage)));
        let redirect = Arc::new(RecordingRedirect::new());
        let registry = Arc::new(IntegrationRegistry::builtin(&config.integrations)?);
        let factory = Arc::new(ApiClientFactory::new(
            config.http.clone(),
            Arc::clone(&credentials),
            redirect.clone(),
        ));
        let selection =
            Arc::new(IntegrationSelection::restore(Arc::clone(&registry), Arc::clone(&storage)));
        let auth = AuthService::new(
            Arc::clone(&registry),
            Arc::clone(&factory),
            credentials,
            Arc::clone(&selection),
            Arc::new(SystemClock),
        );

        Ok(Self {
            nike: NikeShipmentService::new(Arc::clone(&registry), Arc::clone(&factory)),
            centauro: CentauroShipmentService::new(Arc::clone(&registry), factory),
            redirect,
            registry,
            selection,
            auth,
        })
    }

    /// Refuse to continue without a valid session.
    pub fn require_session(&self) -> anyhow::Result<()> {
        if !self.auth.is_authenticated() {
            bail!("not logged in; run `cargas login <user>` first");
        }
        Ok(())
    }

    pub fn current(&self) -> Arc<IntegrationConfig> {
        self.selection.current()
    }

    pub fn backend(&self) -> Backend {
        if self.current().id == INTEGRATION_CENTAURO {
            Backend::Centauro
        } else {
            Backend::Nike
        }
    }

    /// Status vocabulary of the selected integration.
    pub fn vocabulary(&self) -> Result<StatusVocabulary> {
        let current = self.current();
        StatusVocabulary::for_integration(&current.id).ok_or_else(|| {
            CargasError::Config(format!("no status vocabulary for integration {}", current.id))
        })
    }
}
