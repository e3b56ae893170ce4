//! Auth-provider login wire types

use serde::{Deserialize, Serialize};

/// Body of `POST /autenticacao`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub senha: String,
}

/// Envelope returned by the login endpoint; `status == 1` means success.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

/// Payload of the login envelope. A rejected login may carry only `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub expire_at: Option<String>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_envelope_with_data_message_decodes() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"status":0,"message":"Usuário ou senha inválidos","data":{"message":"tente de novo"}}"#,
        )
        .unwrap();
        assert!(!response.is_success());
        let data = response.data.unwrap();
        assert_eq!(data.message.as_deref(), Some("tente de novo"));
        assert!(data.access_key.is_none());
        assert!(data.expire_at.is_none());
    }

    #[test]
    fn accepted_envelope_carries_key_and_expiry() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"status":1,"data":{"access_key":"abc","expire_at":"2030-01-01T00:00:00Z"}}"#,
        )
        .unwrap();
        assert!(response.is_success());
        let data = response.data.unwrap();
        assert_eq!(data.access_key.as_deref(), Some("abc"));
        assert_eq!(data.expire_at.as_deref(), Some("2030-01-01T00:00:00Z"));
    }
}
