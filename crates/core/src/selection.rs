//! Active integration for the running application
//!
//! Exactly one selection exists per application context. It is restored from
//! session storage at startup and persisted on every change.

use std::sync::Arc;

use cargas_domain::constants::STORAGE_KEY_CURRENT_INTEGRATION;
use cargas_domain::{IntegrationConfig, Result};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::ports::SessionStorage;
use crate::registry::IntegrationRegistry;

/// Currently selected integration, persisted under `currentIntegration`.
pub struct IntegrationSelection {
    registry: Arc<IntegrationRegistry>,
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Arc<IntegrationConfig>>,
}

impl IntegrationSelection {
    /// Restore the persisted selection. Absent or unknown ids resolve to the
    /// registry default.
    pub fn restore(registry: Arc<IntegrationRegistry>, storage: Arc<dyn SessionStorage>) -> Self {
        let stored = match storage.get(STORAGE_KEY_CURRENT_INTEGRATION) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "failed to read selected integration");
                None
            }
        };
        let current = match stored.as_deref() {
            Some(id) => registry.get(id),
            None => registry.default_integration(),
        };

        Self { registry, storage, current: RwLock::new(current) }
    }

    /// The selected integration's config.
    pub fn current(&self) -> Arc<IntegrationConfig> {
        self.current.read().clone()
    }

    /// Switch to `id`. Unknown ids resolve to the default integration; the
    /// resolved id is what gets persisted.
    ///
    /// # Errors
    /// Returns `CargasError::Storage` if the selection cannot be persisted.
    /// The in-memory selection is only changed after a successful write.
    pub fn select(&self, id: &str) -> Result<Arc<IntegrationConfig>> {
        let resolved = self.registry.get(id);
        if resolved.id != id {
            warn!(requested = id, resolved = %resolved.id, "unknown integration, using default");
        }

        let mut current = self.current.write();
        self.storage.set(STORAGE_KEY_CURRENT_INTEGRATION, &resolved.id)?;
        *current = Arc::clone(&resolved);
        info!(integration = %resolved.id, "integration selected");
        Ok(resolved)
    }

    /// Forget the persisted selection and return to the default integration.
    ///
    /// # Errors
    /// Returns `CargasError::Storage` if the key cannot be removed.
    pub fn reset(&self) -> Result<()> {
        let mut current = self.current.write();
        self.storage.remove(STORAGE_KEY_CURRENT_INTEGRATION)?;
        *current = self.registry.default_integration();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cargas_domain::constants::{INTEGRATION_CENTAURO, INTEGRATION_NIKE};
    use cargas_domain::IntegrationEndpoints;

    use super::*;
    use crate::storage::MemorySessionStorage;

    fn setup() -> (Arc<IntegrationRegistry>, Arc<MemorySessionStorage>) {
        let registry =
            Arc::new(IntegrationRegistry::builtin(&IntegrationEndpoints::default()).unwrap());
        (registry, Arc::new(MemorySessionStorage::new()))
    }

    #[test]
    fn restores_default_when_nothing_stored() {
        let (registry, storage) = setup();
        let selection = IntegrationSelection::restore(registry, storage);
        assert_eq!(selection.current().id, INTEGRATION_NIKE);
    }

    #[test]
    fn restores_persisted_integration() {
        let (registry, storage) = setup();
        storage.set(STORAGE_KEY_CURRENT_INTEGRATION, INTEGRATION_CENTAURO).unwrap();

        let selection = IntegrationSelection::restore(registry, storage);
        assert_eq!(selection.current().id, INTEGRATION_CENTAURO);
    }

    #[test]
    fn unknown_stored_id_restores_default() {
        let (registry, storage) = setup();
        storage.set(STORAGE_KEY_CURRENT_INTEGRATION, "legacy").unwrap();

        let selection = IntegrationSelection::restore(registry, storage);
        assert_eq!(selection.current().id, INTEGRATION_NIKE);
    }

    #[test]
    fn select_persists_and_survives_restore() {
        let (registry, storage) = setup();
        let selection = IntegrationSelection::restore(registry.clone(), storage.clone());

        let selected = selection.select(INTEGRATION_CENTAURO).unwrap();
        assert_eq!(selected.id, INTEGRATION_CENTAURO);
        assert_eq!(
            storage.get(STORAGE_KEY_CURRENT_INTEGRATION).unwrap().as_deref(),
            Some(INTEGRATION_CENTAURO)
        );

        let restored = IntegrationSelection::restore(registry, storage);
        assert_eq!(restored.current().id, INTEGRATION_CENTAURO);
    }

    #[test]
    fn select_unknown_persists_resolved_default() {
        let (registry, storage) = setup();
        let selection = IntegrationSelection::restore(registry, storage.clone());
        selection.select(INTEGRATION_CENTAURO).unwrap();

        let selected = selection.select("nope").unwrap();

        assert_eq!(selected.id, INTEGRATION_NIKE);
        assert_eq!(
            storage.get(STORAGE_KEY_CURRENT_INTEGRATION).unwrap().as_deref(),
            Some(INTEGRATION_NIKE)
        );
    }

    #[test]
    fn reset_returns_to_default() {
        let (registry, storage) = setup();
        let selection = IntegrationSelection::restore(registry, storage.clone());
        selection.select(INTEGRATION_CENTAURO).unwrap();

        selection.reset().unwrap();

        assert_eq!(selection.current().id, INTEGRATION_NIKE);
        assert!(storage.get(STORAGE_KEY_CURRENT_INTEGRATION).unwrap().is_none());
    }
}
