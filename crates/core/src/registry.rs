//! Integration registry
//!
//! Static table of the backends the client can operate against. The table is
//! validated once, at construction: unique ids, exactly one auth provider and
//! a default that exists. After that every lookup is infallible.

use std::collections::HashSet;
use std::sync::Arc;

use cargas_domain::constants::{
    CENTAURO_API_PREFIX, DEFAULT_INTEGRATION, INTEGRATION_CENTAURO, INTEGRATION_NIKE,
};
use cargas_domain::{
    CargasError, IntegrationConfig, IntegrationEndpoints, IntegrationFeatures, Result,
};

/// Known integrations in registration order.
#[derive(Debug, Clone)]
pub struct IntegrationRegistry {
    integrations: Vec<Arc<IntegrationConfig>>,
    default_index: usize,
    auth_provider_index: usize,
}

impl IntegrationRegistry {
    /// Build a registry from explicit configs.
    ///
    /// # Errors
    /// Returns `CargasError::Config` if the list is empty, an id repeats, the
    /// number of auth providers is not exactly one, or `default_id` is not
    /// registered.
    pub fn new(configs: Vec<IntegrationConfig>, default_id: &str) -> Result<Self> {
        if configs.is_empty() {
            return Err(CargasError::Config("no integrations registered".into()));
        }

        let mut seen = HashSet::new();
        for config in &configs {
            if !seen.insert(config.id.as_str()) {
                return Err(CargasError::Config(format!(
                    "integration id registered twice: {}",
                    config.id
                )));
            }
        }

        let providers: Vec<usize> = configs
            .iter()
            .enumerate()
            .filter(|(_, config)| config.is_auth_provider)
            .map(|(index, _)| index)
            .collect();
        let auth_provider_index = match providers.as_slice() {
            [index] => *index,
            [] => {
                return Err(CargasError::Config("no integration is flagged as auth provider".into()))
            }
            _ => {
                return Err(CargasError::Config(format!(
                    "{} integrations are flagged as auth provider, expected exactly one",
                    providers.len()
                )))
            }
        };

        let default_index =
            configs.iter().position(|config| config.id == default_id).ok_or_else(|| {
                CargasError::Config(format!("default integration '{default_id}' is not registered"))
            })?;

        Ok(Self {
            integrations: configs.into_iter().map(Arc::new).collect(),
            default_index,
            auth_provider_index,
        })
    }

    /// The two built-in integrations, pointed at the configured endpoints.
    ///
    /// # Errors
    /// Never fails for the built-in table; the `Result` keeps the same
    /// validation path as [`IntegrationRegistry::new`].
    pub fn builtin(endpoints: &IntegrationEndpoints) -> Result<Self> {
        let nike = IntegrationConfig {
            id: INTEGRATION_NIKE.to_string(),
            name: "Nike".to_string(),
            display_name: "Nike".to_string(),
            description: "Gestão de Cargas Nike".to_string(),
            api_base_url: endpoints.nike_api_url.clone(),
            api_path_prefix: String::new(),
            is_auth_provider: true,
            features: IntegrationFeatures::default(),
        };
        let centauro = IntegrationConfig {
            id: INTEGRATION_CENTAURO.to_string(),
            name: "Centauro".to_string(),
            display_name: "Centauro".to_string(),
            description: "Gestão de Cargas Centauro".to_string(),
            api_base_url: endpoints.centauro_api_url.clone(),
            api_path_prefix: CENTAURO_API_PREFIX.to_string(),
            is_auth_provider: false,
            features: IntegrationFeatures::default(),
        };

        Self::new(vec![nike, centauro], DEFAULT_INTEGRATION)
    }

    /// Config for `id`, or the default integration's config for unknown ids.
    pub fn get(&self, id: &str) -> Arc<IntegrationConfig> {
        self.integrations
            .iter()
            .find(|config| config.id == id)
            .cloned()
            .unwrap_or_else(|| self.default_integration())
    }

    /// Whether `id` names a registered integration.
    pub fn contains(&self, id: &str) -> bool {
        self.integrations.iter().any(|config| config.id == id)
    }

    /// All integrations in registration order.
    pub fn list(&self) -> Vec<Arc<IntegrationConfig>> {
        self.integrations.clone()
    }

    /// The single integration that issues the shared token.
    pub fn auth_provider(&self) -> Arc<IntegrationConfig> {
        Arc::clone(&self.integrations[self.auth_provider_index])
    }

    /// Integration used when none is selected or the selection is unknown.
    pub fn default_integration(&self) -> Arc<IntegrationConfig> {
        Arc::clone(&self.integrations[self.default_index])
    }
}
