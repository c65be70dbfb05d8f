use std::env;

use crate::ConfigError;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Settings for verifying (and, in tests, signing) access tokens.
///
/// # Environment Variables
///
/// - `JWT_SECRET`: HMAC secret shared with the token issuer
/// - `JWT_ACCESS_EXPIRY`: lifetime in seconds of tokens signed locally (default: `3600`)
/// - `JWT_LEEWAY`: clock skew tolerated on `exp` in seconds (default: `60`)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            leeway_seconds: env::var("JWT_LEEWAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Rejects settings the verifier cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: "secret must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// True when no `JWT_SECRET` was provided.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
