//! Shared session credential
//!
//! One credential serves every integration. It lives in the session storage
//! under the `token`, `token_expiration` and `username` keys and is always
//! written and cleared as a unit.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use cargas_domain::constants::{
    CREDENTIAL_KEYS, STORAGE_KEY_TOKEN, STORAGE_KEY_TOKEN_EXPIRATION, STORAGE_KEY_USERNAME,
};
use cargas_domain::{Credential, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::ports::SessionStorage;

/// Owner of the persisted credential.
///
/// Writes go through a mutex so a save racing a 401 teardown never leaves a
/// token without its expiry (or the reverse).
pub struct CredentialStore {
    storage: Arc<dyn SessionStorage>,
    write_lock: Mutex<()>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage, write_lock: Mutex::new(()) }
    }

    /// Persist `credential`, replacing any previous one.
    ///
    /// # Errors
    /// Returns `CargasError::Storage` if the backing storage rejects a write.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        let _guard = self.write_lock.lock();
        let expires_at = credential.expires_at.to_rfc3339_opts(SecondsFormat::Millis, true);

        self.storage.set(STORAGE_KEY_TOKEN, &credential.token)?;
        self.storage.set(STORAGE_KEY_TOKEN_EXPIRATION, &expires_at)?;
        self.storage.set(STORAGE_KEY_USERNAME, &credential.username)?;
        debug!(username = %credential.username, %expires_at, "credential saved");
        Ok(())
    }

    /// Read the stored credential.
    ///
    /// A token whose expiry is missing or unreadable is reported as no
    /// credential at all.
    ///
    /// # Errors
    /// Returns `CargasError::Storage` if the backing storage cannot be read.
    pub fn load(&self) -> Result<Option<Credential>> {
        let Some(token) = self.storage.get(STORAGE_KEY_TOKEN)? else {
            return Ok(None);
        };
        let Some(raw_expiry) = self.storage.get(STORAGE_KEY_TOKEN_EXPIRATION)? else {
            warn!("stored token has no expiry, ignoring it");
            return Ok(None);
        };
        let expires_at = match DateTime::parse_from_rfc3339(&raw_expiry) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(err) => {
                warn!(error = %err, "stored token expiry is unreadable, ignoring it");
                return Ok(None);
            }
        };
        let username = self.storage.get(STORAGE_KEY_USERNAME)?.unwrap_or_default();

        Ok(Some(Credential { token, expires_at, username }))
    }

    /// Raw stored token, regardless of expiry.
    ///
    /// Storage failures read as "no token" so header injection never fails a
    /// request on its own.
    pub fn token(&self) -> Option<String> {
        match self.storage.get(STORAGE_KEY_TOKEN) {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                warn!(error = %err, "failed to read stored token");
                None
            }
        }
    }

    /// User name stored with the credential.
    pub fn username(&self) -> Option<String> {
        self.storage.get(STORAGE_KEY_USERNAME).ok().flatten()
    }

    /// Remove every credential key. Clearing an empty store is a no-op.
    ///
    /// # Errors
    /// Returns `CargasError::Storage` if the backing storage rejects a removal.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.storage.remove_many(&CREDENTIAL_KEYS)?;
        debug!("credential cleared");
        Ok(())
    }

    /// True iff a credential is stored and its expiry is strictly after `now`.
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        match self.load() {
            Ok(Some(credential)) => credential.is_valid_at(now),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "failed to read credential");
                false
            }
        }
    }

    /// Claims of the stored token, for display.
    pub fn decode_token_payload(&self) -> Option<Map<String, Value>> {
        self.token().as_deref().and_then(decode_token_payload)
    }
}

/// Decode the payload segment of a JWT without verifying it.
///
/// The token must have exactly three dot-separated segments and the middle
/// one must be base64url-encoded JSON object. The standard alphabet and
/// trailing padding are tolerated. Anything else yields `None`.
pub fn decode_token_payload(token: &str) -> Option<Map<String, Value>> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        warn!(segments = segments.len(), "token is not a three-segment JWT");
        return None;
    };

    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = match URL_SAFE_NO_PAD.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "token payload is not valid base64url");
            return None;
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(claims)) => Some(claims),
        Ok(_) => {
            warn!("token payload is not a JSON object");
            None
        }
        Err(err) => {
            warn!(error = %err, "token payload is not valid JSON");
            None
        }
    }
}
