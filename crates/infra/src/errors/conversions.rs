//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use cargas_domain::constants::NETWORK_FAILURE_MESSAGE;
use cargas_domain::CargasError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CargasError);

impl From<InfraError> for CargasError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CargasError> for InfraError {
    fn from(value: CargasError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCargasError {
    fn into_cargas(self) -> CargasError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CargasError */
/* -------------------------------------------------------------------------- */

impl IntoCargasError for HttpError {
    fn into_cargas(self) -> CargasError {
        if self.is_timeout() {
            return CargasError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CargasError::Network(NETWORK_FAILURE_MESSAGE.into());
        }

        if self.is_builder() {
            return CargasError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return CargasError::InvalidResponse(format!("failed to decode response: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 => CargasError::Unauthorized(message),
                404 => CargasError::NotFound(message),
                400..=499 => CargasError::Validation(message),
                500..=599 => CargasError::Server(message),
                _ => CargasError::InvalidResponse(message),
            };
        }

        CargasError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_cargas())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CargasError */
/* -------------------------------------------------------------------------- */

impl IntoCargasError for IoError {
    fn into_cargas(self) -> CargasError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => CargasError::Storage(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                CargasError::Storage(format!("permission denied: {self}"))
            }
            _ => CargasError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_cargas())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_401_maps_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: CargasError = InfraError::from(error).into();
        match mapped {
            CargasError::Unauthorized(msg) => assert!(msg.contains("401")),
            other => panic!("expected unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_422_maps_to_validation() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(422)).mount(&server).await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: CargasError = InfraError::from(error).into();
        assert!(matches!(mapped, CargasError::Validation(_)));
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: CargasError = InfraError::from(error).into();
        assert_eq!(mapped, CargasError::Network(NETWORK_FAILURE_MESSAGE.into()));
    }

    #[test]
    fn io_errors_map_to_storage() {
        let err = IoError::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let mapped: CargasError = InfraError::from(err).into();
        match mapped {
            CargasError::Storage(msg) => assert!(msg.contains("permission denied")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
