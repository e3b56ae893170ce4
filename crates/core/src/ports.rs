//! Port interfaces for client-side state and navigation
//!
//! These traits define the boundaries between core logic and the
//! infrastructure that persists session state or moves the operator back to
//! the login entry point.

use cargas_domain::Result;

/// Key/value persistence for session state (token, expiry, username,
/// selected integration).
pub trait SessionStorage: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never set or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove several keys in one go.
    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Sends the operator back to the login entry point after the session was
/// torn down.
pub trait LoginRedirect: Send + Sync {
    /// Called once per teardown, after the credential is cleared.
    fn redirect_to_login(&self);
}
