use std::sync::Arc;
use std::time::Duration;

use cargas_domain::{CargasError, Result};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use super::hooks::{RequestHook, ResponseHook, ResponseMeta};
use crate::errors::InfraError;

/// HTTP client with a composable hook chain and timeout support.
///
/// Every send is a single attempt: failures are reported to the caller, never
/// retried.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration and no hooks.
    ///
    /// # Errors
    /// Returns `CargasError::Internal` if the TLS backend cannot be set up.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Run the request hooks, send once, then run the response hooks.
    ///
    /// Non-2xx statuses are returned as responses; only transport failures
    /// become errors here.
    ///
    /// # Errors
    /// Returns the first request hook error, or the transport failure mapped
    /// through [`InfraError`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut request = builder.build().map_err(|err| CargasError::from(InfraError::from(err)))?;

        for hook in &self.request_hooks {
            hook.on_request(&mut request).await?;
        }

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let meta = ResponseMeta { method, url, status: response.status() };
                debug!(method = %meta.method, url = %meta.url, status = %meta.status, "received HTTP response");

                for hook in &self.response_hooks {
                    hook.on_response(&meta).await;
                }
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: None,
            default_headers: None,
            request_hooks: Vec::new(),
            response_hooks: Vec::new(),
        }
    }
}

impl HttpClientBuilder {
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Append a hook that runs before each request.
    #[must_use]
    pub fn request_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.request_hooks.push(hook);
        self
    }

    /// Append a hook that runs after each response.
    #[must_use]
    pub fn response_hook(mut self, hook: Arc<dyn ResponseHook>) -> Self {
        self.response_hooks.push(hook);
        self
    }

    /// # Errors
    /// Returns `CargasError::Internal` if reqwest rejects the configuration.
    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| CargasError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            request_hooks: self.request_hooks,
            response_hooks: self.response_hooks,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reqwest::header::HeaderValue;
    use reqwest::{Request, StatusCode};
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    struct StaticHeader;

    #[async_trait]
    impl RequestHook for StaticHeader {
        async fn on_request(&self, request: &mut Request) -> Result<()> {
            request.headers_mut().insert("x-hook", HeaderValue::from_static("1"));
            Ok(())
        }
    }

    struct Refuse;

    #[async_trait]
    impl RequestHook for Refuse {
        async fn on_request(&self, _request: &mut Request) -> Result<()> {
            Err(CargasError::InvalidInput("refused".into()))
        }
    }

    #[derive(Default)]
    struct CountStatuses {
        seen: AtomicUsize,
    }

    #[async_trait]
    impl ResponseHook for CountStatuses {
        async fn on_response(&self, _response: &ResponseMeta) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn request_hooks_rewrite_outgoing_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("x-hook", "1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::builder().request_hook(Arc::new(StaticHeader)).build().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn failing_request_hook_aborts_send() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = HttpClient::builder().request_hook(Arc::new(Refuse)).build().unwrap();
        let result = client.send(client.request(Method::GET, server.uri())).await;

        assert_eq!(result.unwrap_err(), CargasError::InvalidInput("refused".into()));
    }

    #[tokio::test]
    async fn error_statuses_are_single_attempt_and_seen_by_hooks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let counter = Arc::new(CountStatuses::default());
        let client = HttpClient::builder().response_hook(counter.clone()).build().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(counter.seen.load(Ordering::SeqCst), 1);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn network_failure_is_not_retried() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED

        let counter = Arc::new(CountStatuses::default());
        let client = HttpClient::builder().response_hook(counter.clone()).build().unwrap();

        let result = client.send(client.request(Method::GET, format!("http://{addr}"))).await;

        assert!(matches!(result, Err(CargasError::Network(_))));
        assert_eq!(counter.seen.load(Ordering::SeqCst), 0);
    }
}
