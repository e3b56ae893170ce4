use std::sync::Arc;

use cargas_core::{
    CredentialStore, IntegrationRegistry, IntegrationSelection, MemorySessionStorage, SystemClock,
};
use cargas_domain::{Credential, HttpSettings, IntegrationEndpoints};
use cargas_infra::{
    ApiClientFactory, AuthService, CentauroShipmentService, NikeShipmentService, RecordingRedirect,
};
use chrono::{Duration, Utc};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A fully wired client pointed at two mock backends.
///
/// Every test builds its own harness; nothing is shared between tests.
pub struct TestApp {
    pub nike: MockServer,
    pub centauro: MockServer,
    pub storage: Arc<MemorySessionStorage>,
    pub credentials: Arc<CredentialStore>,
    pub redirect: Arc<RecordingRedirect>,
    pub registry: Arc<IntegrationRegistry>,
    pub factory: Arc<ApiClientFactory>,
    pub selection: Arc<IntegrationSelection>,
    pub auth: AuthService,
    pub nike_shipments: NikeShipmentService,
    pub centauro_shipments: CentauroShipmentService,
}

impl TestApp {
    pub async fn start() -> Self {
        let nike = MockServer::start().await;
        let centauro = MockServer::start().await;

        let endpoints =
            IntegrationEndpoints { nike_api_url: nike.uri(), centauro_api_url: centauro.uri() };
        let registry = Arc::new(IntegrationRegistry::builtin(&endpoints).unwrap());
        Self::with_registry(nike, centauro, registry)
    }

    pub fn with_registry(
        nike: MockServer,
        centauro: MockServer,
        registry: Arc<IntegrationRegistry>,
    ) -> Self {
        let storage = Arc::new(MemorySessionStorage::new());
        let credentials = Arc::new(CredentialStore::new(storage.clone()));
        let redirect = Arc::new(RecordingRedirect::new());
        let factory = Arc::new(ApiClientFactory::new(
            HttpSettings::default(),
            credentials.clone(),
            redirect.clone(),
        ));
        let selection = Arc::new(IntegrationSelection::restore(registry.clone(), storage.clone()));
        let auth = AuthService::new(
            registry.clone(),
            factory.clone(),
            credentials.clone(),
            selection.clone(),
            Arc::new(SystemClock),
        );
        let nike_shipments = NikeShipmentService::new(registry.clone(), factory.clone());
        let centauro_shipments = CentauroShipmentService::new(registry.clone(), factory.clone());

        Self {
            nike,
            centauro,
            storage,
            credentials,
            redirect,
            registry,
            factory,
            selection,
            auth,
            nike_shipments,
            centauro_shipments,
        }
    }

    /// Store a valid credential without going through the login endpoint.
    pub fn seed_token(&self, token: &str) {
        self.credentials
            .save(&Credential::new(token, Utc::now() + Duration::hours(1), "alice"))
            .unwrap();
    }

    /// Make the auth provider accept any login and issue `token`.
    pub async fn mount_login(&self, token: &str) {
        let expire_at = (Utc::now() + Duration::hours(8)).format("%Y-%m-%dT%H:%M:%S").to_string();
        Mock::given(method("POST"))
            .and(path("/autenticacao"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 1,
                "message": "ok",
                "data": { "access_key": token, "expire_at": expire_at }
            })))
            .mount(&self.nike)
            .await;
    }
}

/// Content type of a received request, or an empty string.
pub fn content_type(request: &wiremock::Request) -> String {
    request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Authorization header of a received request, if any.
pub fn authorization(request: &wiremock::Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
