//! Integration tests for the shared login session
//!
//! **Coverage:**
//! - Login success, rejection and network failure against the auth provider
//! - One token used by both integrations
//! - 401 from either backend tears the session down
//! - Logout clears credential and selection
//! - Login → select second integration → list with the login token

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::net::TcpListener;
use std::sync::Arc;

use cargas_core::{IntegrationRegistry, SessionStorage};
use cargas_domain::constants::{
    INTEGRATION_CENTAURO, INTEGRATION_NIKE, LOGIN_FAILED_MESSAGE, NETWORK_FAILURE_MESSAGE,
    STORAGE_KEY_CURRENT_INTEGRATION,
};
use cargas_domain::{CargasError, IntegrationEndpoints};
use serde_json::json;
use support::{authorization, TestApp};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_persists_credential() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .and(body_json(json!({ "usuario": "alice", "senha": "s3cret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "message": "Login realizado",
            "data": { "access_key": "tok-1", "expire_at": "2999-01-01T00:00:00" }
        })))
        .expect(1)
        .mount(&app.nike)
        .await;

    let credential = app.auth.login("alice", "s3cret").await.unwrap();

    assert_eq!(credential.token, "tok-1");
    assert_eq!(credential.username, "alice");
    assert!(app.auth.is_authenticated());
    assert_eq!(app.auth.current_username().as_deref(), Some("alice"));
    assert_eq!(app.storage.get("token").unwrap().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn rejected_login_reports_server_message() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": 0, "message": "Usuário ou senha inválidos" })),
        )
        .mount(&app.nike)
        .await;

    let err = app.auth.login("alice", "wrong").await.unwrap_err();

    assert_eq!(err, CargasError::Auth("Usuário ou senha inválidos".into()));
    assert!(!app.auth.is_authenticated());
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn rejected_login_with_data_message_reports_server_message() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "message": "Usuário ou senha inválidos",
            "data": { "message": "Verifique os dados informados" }
        })))
        .mount(&app.nike)
        .await;

    let err = app.auth.login("alice", "wrong").await.unwrap_err();

    assert_eq!(err, CargasError::Auth("Usuário ou senha inválidos".into()));
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn rejected_login_falls_back_to_data_message() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": { "message": "Usuário bloqueado" }
        })))
        .mount(&app.nike)
        .await;

    let err = app.auth.login("alice", "wrong").await.unwrap_err();

    assert_eq!(err, CargasError::Auth("Usuário bloqueado".into()));
}

#[tokio::test]
async fn rejected_login_without_message_uses_generic_text() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 0 })))
        .mount(&app.nike)
        .await;

    let err = app.auth.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err, CargasError::Auth(LOGIN_FAILED_MESSAGE.into()));
}

#[tokio::test]
async fn login_http_error_uses_server_message() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "bloqueado" })))
        .mount(&app.nike)
        .await;

    let err = app.auth.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err, CargasError::Auth("bloqueado".into()));
}

#[tokio::test]
async fn login_with_unreachable_server_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let centauro = MockServer::start().await;
    let registry = Arc::new(
        IntegrationRegistry::builtin(&IntegrationEndpoints {
            nike_api_url: dead,
            centauro_api_url: centauro.uri(),
        })
        .unwrap(),
    );
    let app = TestApp::with_registry(MockServer::start().await, centauro, registry);

    let err = app.auth.login("alice", "s3cret").await.unwrap_err();
    assert_eq!(err, CargasError::Network(NETWORK_FAILURE_MESSAGE.into()));
}

#[tokio::test]
async fn unreadable_expiry_fails_login() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/autenticacao"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1,
            "data": { "access_key": "tok", "expire_at": "whenever" }
        })))
        .mount(&app.nike)
        .await;

    assert!(matches!(app.auth.login("alice", "s3cret").await, Err(CargasError::Auth(_))));
    assert!(app.credentials.token().is_none());
}

#[tokio::test]
async fn both_integrations_send_the_same_token() {
    let app = TestApp::start().await;
    app.seed_token("shared-token");
    Mock::given(method("GET"))
        .and(path("/cargas/"))
        .and(header("authorization", "Bearer shared-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.nike)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/shipments/"))
        .and(header("authorization", "Bearer shared-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.centauro)
        .await;

    app.nike_shipments.list_shipments().await.unwrap();
    app.centauro_shipments.list_shipments().await.unwrap();
}

#[tokio::test]
async fn requests_without_credential_are_unauthenticated() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/cargas/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.nike)
        .await;

    app.nike_shipments.list_shipments().await.unwrap();

    let requests = app.nike.received_requests().await.unwrap();
    assert!(authorization(&requests[0]).is_none());
}

#[tokio::test]
async fn unauthorized_from_auth_provider_ends_session() {
    let app = TestApp::start().await;
    app.seed_token("expired");
    Mock::given(method("GET"))
        .and(path("/cargas/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "token expirado" })))
        .mount(&app.nike)
        .await;

    let err = app.nike_shipments.list_shipments().await.unwrap_err();

    assert_eq!(err, CargasError::Unauthorized("token expirado".into()));
    assert!(app.credentials.token().is_none());
    assert_eq!(app.redirect.count(), 1);
}

#[tokio::test]
async fn unauthorized_from_second_integration_ends_shared_session() {
    let app = TestApp::start().await;
    app.seed_token("expired");
    Mock::given(method("GET"))
        .and(path("/api/v2/shipments/s1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.centauro)
        .await;

    let err = app.centauro_shipments.get_shipment("s1").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(app.credentials.token().is_none());
    assert!(!app.auth.is_authenticated());
    assert!(app.redirect.was_redirected());
}

#[tokio::test]
async fn logout_clears_session_and_selection() {
    let app = TestApp::start().await;
    app.seed_token("tok");
    app.selection.select(INTEGRATION_CENTAURO).unwrap();
    app.factory.client_for(&app.registry.get(INTEGRATION_NIKE)).unwrap();

    app.auth.logout().unwrap();
    app.auth.logout().unwrap();

    assert!(!app.auth.is_authenticated());
    assert!(app.storage.is_empty());
    assert!(app.storage.get(STORAGE_KEY_CURRENT_INTEGRATION).unwrap().is_none());
    assert_eq!(app.selection.current().id, INTEGRATION_NIKE);
    assert!(app.factory.is_empty());
}

#[tokio::test]
async fn login_select_and_list_with_login_token() {
    let app = TestApp::start().await;
    app.mount_login("alice-token").await;
    Mock::given(method("GET"))
        .and(path("/api/v2/shipments/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "s1", "status": { "code": "25" } }]
        })))
        .expect(1)
        .mount(&app.centauro)
        .await;

    let credential = app.auth.login("alice", "s3cret").await.unwrap();
    assert_eq!(credential.username, "alice");

    let selected = app.selection.select(INTEGRATION_CENTAURO).unwrap();
    assert_eq!(selected.id, INTEGRATION_CENTAURO);
    assert_eq!(app.selection.current().id, INTEGRATION_CENTAURO);

    let shipments = app.centauro_shipments.list_shipments().await.unwrap();
    assert_eq!(shipments.len(), 1);

    let requests = app.centauro.received_requests().await.unwrap();
    assert_eq!(authorization(&requests[0]).as_deref(), Some("Bearer alice-token"));
    assert_eq!(credential.token, "alice-token");
}
