use std::sync::atomic::{AtomicUsize, Ordering};

use cargas_core::LoginRedirect;
use tracing::warn;

/// [`LoginRedirect`] for non-interactive front ends: records that the session
/// ended so the caller can tell the operator to log in again.
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    count: AtomicUsize,
}

impl RecordingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of redirects requested so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn was_redirected(&self) -> bool {
        self.count() > 0
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
        warn!("session ended, login required");
    }
}
