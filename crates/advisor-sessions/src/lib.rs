//! # Advisor Sessions
//!
//! [`SessionStore`] backends for the access gate.
//!
//! This crate provides:
//! - [`RedisSessionStore`]: read-only lookups against the session records
//!   the login service keeps in Redis
//! - [`InMemorySessionStore`]: a process-local store for tests and local runs
//! - [`SessionStoreConfig`]: backend selection from environment variables
//! - [`keys`]: Redis key layout
//!
//! # Example
//!
//! ```ignore
//! use advisor_sessions::{SessionStoreConfig, connect};
//!
//! let config = SessionStoreConfig::from_env();
//! let store = connect(&config).await?;
//! store.ping().await?;
//! ```

pub mod config;
pub mod keys;
pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use advisor_auth::{SessionStore, SessionStoreError};
use tracing::info;

pub use config::{SessionBackend, SessionStoreConfig};
pub use memory::InMemorySessionStore;
pub use redis_store::{RedisSessionStore, SessionRecord};

/// Builds the session store selected by `config`.
///
/// # Errors
///
/// Returns [`SessionStoreError::Configuration`] for an unusable Redis URL and
/// [`SessionStoreError::Unavailable`] when Redis cannot be reached.
pub async fn connect(config: &SessionStoreConfig) -> Result<Arc<dyn SessionStore>, SessionStoreError> {
    match config.backend {
        SessionBackend::Redis => {
            let store = RedisSessionStore::new(&config.redis_url, &config.key_prefix).await?;
            info!(backend = "redis", "Session store connected");
            Ok(Arc::new(store))
        }
        SessionBackend::Memory => {
            info!(backend = "memory", "Using in-memory session store");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
    }
}
