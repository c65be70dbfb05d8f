//! Process-local session store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use advisor_auth::{SessionState, SessionStore, SessionStoreError};

/// In-memory [`SessionStore`].
///
/// Cloning shares the underlying map, so a test can keep a handle and revoke
/// sessions while the gate holds another.
#[derive(Clone, Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_active(&self, session_id: &str) {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), SessionState::Active);
    }

    /// Marks a session revoked. Returns `false` if it did not exist.
    pub async fn revoke(&self, session_id: &str) -> bool {
        match self.sessions.write().await.get_mut(session_id) {
            Some(state) => {
                *state = SessionState::Revoked;
                true
            }
            None => false,
        }
    }

    /// Deletes a session, as a logout does.
    pub async fn remove(&self, session_id: &str) {
        self.sessions.write().await.remove(session_id);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn lookup_session(
        &self,
        session_id: &str,
    ) -> Result<Option<SessionState>, SessionStoreError> {
        Ok(self.sessions.read().await.get(session_id).copied())
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
