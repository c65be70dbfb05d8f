//! Session store configuration.

use std::env;
use std::str::FromStr;

/// Where session records are read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionBackend {
    Redis,
    Memory,
}

impl FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(SessionBackend::Redis),
            "memory" => Ok(SessionBackend::Memory),
            other => Err(format!("unknown session backend: {}", other)),
        }
    }
}

/// Session store configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SESSION_BACKEND`: `redis` or `memory` (default: `redis`)
/// - `REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
/// - `SESSION_KEY_PREFIX`: prefix shared with the login service (default: `advisor`)
#[derive(Clone, Debug)]
pub struct SessionStoreConfig {
    pub backend: SessionBackend,
    pub redis_url: String,
    pub key_prefix: String,
}

impl SessionStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised `SESSION_BACKEND` falls back to Redis.
    pub fn from_env() -> Self {
        Self {
            backend: env::var("SESSION_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SessionBackend::Redis),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            key_prefix: env::var("SESSION_KEY_PREFIX").unwrap_or_else(|_| "advisor".into()),
        }
    }
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::Redis,
            redis_url: "redis://127.0.0.1:6379".into(),
            key_prefix: "advisor".into(),
        }
    }
}
