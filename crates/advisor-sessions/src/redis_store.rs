//! Redis-backed session lookups.
//!
//! The login service owns the session records; this store only reads them.
//! Each record is a JSON document stored under [`keys::session`]:
//!
//! ```json
//! {"user_id": "42", "revoked": false}
//! ```
//!
//! Logout and administrative revocation either delete the key or set
//! `revoked` to `true`. Every lookup goes to Redis, so a revocation is seen
//! by the next request.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, ErrorKind, RedisError, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use advisor_auth::{SessionState, SessionStore, SessionStoreError};

use crate::keys;

/// Session record as written by the login service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    #[serde(default)]
    pub revoked: bool,
}

impl SessionRecord {
    pub fn state(&self) -> SessionState {
        if self.revoked {
            SessionState::Revoked
        } else {
            SessionState::Active
        }
    }
}

/// Maps a stored value to a session state.
///
/// A value that does not parse, including one that is not valid UTF-8, is
/// treated as revoked: the gate fails closed on records it cannot read.
pub fn parse_record(session_id: &str, raw: &[u8]) -> SessionState {
    match serde_json::from_slice::<SessionRecord>(raw) {
        Ok(record) => record.state(),
        Err(e) => {
            warn!(session_id = %session_id, error = %e, "Unreadable session record");
            SessionState::Revoked
        }
    }
}

fn map_redis_error(e: RedisError) -> SessionStoreError {
    if e.kind() == ErrorKind::InvalidClientConfig {
        SessionStoreError::Configuration(e.to_string())
    } else {
        SessionStoreError::Unavailable(e.to_string())
    }
}

/// Read-only Redis session store with a managed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

impl RedisSessionStore {
    /// Connects to Redis.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Configuration`] if the URL is unusable,
    /// [`SessionStoreError::Unavailable`] if the initial connection fails.
    pub async fn new(redis_url: &str, key_prefix: &str) -> Result<Self, SessionStoreError> {
        let client = Client::open(redis_url).map_err(map_redis_error)?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;

        Ok(Self {
            conn,
            key_prefix: key_prefix.to_string(),
        })
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    #[instrument(skip(self), fields(session.operation = "GET"))]
    async fn lookup_session(
        &self,
        session_id: &str,
    ) -> Result<Option<SessionState>, SessionStoreError> {
        let mut conn = self.conn.clone();
        let key = keys::session(&self.key_prefix, session_id);

        let raw: Option<Vec<u8>> = conn.get(&key).await.map_err(map_redis_error)?;

        match raw {
            Some(raw) => {
                let state = parse_record(session_id, &raw);
                debug!(session.key = %key, state = ?state, "Session found");
                Ok(Some(state))
            }
            None => {
                debug!(session.key = %key, "Session not found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self), fields(session.operation = "PING"))]
    async fn ping(&self) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
