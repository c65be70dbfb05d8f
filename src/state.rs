use std::sync::Arc;

use advisor_auth::{AccessGate, JwtVerifier, SessionStore};
use advisor_config::{CorsConfig, JwtConfig};
use advisor_sessions::SessionStoreConfig;
use anyhow::Context;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: AccessGate,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Wires the JWT verifier and the given session store into a gate.
    pub fn new(
        jwt_config: JwtConfig,
        session_store: Arc<dyn SessionStore>,
        cors_config: CorsConfig,
    ) -> Self {
        let verifier = Arc::new(JwtVerifier::new(jwt_config));

        Self {
            gate: AccessGate::new(verifier, session_store),
            cors_config,
        }
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        self.gate.session_store()
    }
}

/// Loads configuration from the environment and connects the session store.
///
/// Configuration mistakes (empty JWT secret, unparseable Redis URL) and an
/// unreachable Redis at startup are returned as errors so the process exits
/// instead of serving requests it can never authorize.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    jwt_config.validate().context("invalid JWT configuration")?;
    if jwt_config.uses_default_secret() {
        tracing::warn!("JWT_SECRET not set, using the development default");
    }

    let session_store = advisor_sessions::connect(&SessionStoreConfig::from_env())
        .await
        .context("failed to initialize session store")?;

    Ok(AppState::new(jwt_config, session_store, CorsConfig::from_env()))
}
