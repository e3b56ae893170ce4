//! Shared session credential

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token issued by the auth-provider integration and accepted by
/// every integration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub username: String,
}

impl Credential {
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        expires_at: DateTime<Utc>,
        username: impl Into<String>,
    ) -> Self {
        Self { token: token.into(), expires_at, username: username.into() }
    }

    /// True iff the expiry is strictly after `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("username", &self.username)
            .finish()
    }
}
