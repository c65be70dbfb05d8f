//! Session store collaborator.
//!
//! Token validity and session validity have separate lifecycles: a token can
//! be cryptographically valid while its session has been logged out or
//! revoked by an administrator. The gate consults a [`SessionStore`] after
//! verification to catch that case.

use async_trait::async_trait;

/// Server-side status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Revoked,
}

/// Failures talking to the session store.
///
/// Neither variant is a judgment about the session; both mean the store
/// could not answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// The store is configured in a way that can never work (bad URL, bad
    /// credentials).
    #[error("session store misconfigured: {0}")]
    Configuration(String),

    /// The store is unreachable or returned a transport error.
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the session records kept by the login service.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Looks up a session. `Ok(None)` means no such session exists.
    async fn lookup_session(
        &self,
        session_id: &str,
    ) -> Result<Option<SessionState>, SessionStoreError>;

    /// Round-trips to the backing store. Used by health checks.
    async fn ping(&self) -> Result<(), SessionStoreError>;

    /// Short backend name used in logs and health output.
    fn backend_name(&self) -> &'static str;
}
