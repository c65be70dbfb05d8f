//! JWT (JSON Web Token) utilities.
//!
//! Access tokens are HS256-signed compact JWTs whose payload is a
//! [`Principal`]. Tokens are issued by the login service; this module
//! verifies them. [`create_access_token`] signs a token with the same shared
//! secret and exists for tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use advisor_auth::{JwtVerifier, TokenVerifier};
//! use advisor_config::JwtConfig;
//!
//! let verifier = JwtVerifier::new(JwtConfig::from_env());
//! let principal = verifier.verify(&token).await?;
//! println!("User ID: {}", principal.sub);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use advisor_config::JwtConfig;
use advisor_core::AppError;

use crate::claims::{Principal, Role};
use crate::verifier::{TokenVerifier, VerificationError};

/// Signs an access token for the given identity and session.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
///
/// # Example
///
/// ```ignore
/// let token = create_access_token(
///     "user-123",
///     "advisor@university.edu",
///     Role::Faculty,
///     "session-abc",
///     &jwt_config,
/// )?;
/// ```
pub fn create_access_token(
    user_id: &str,
    email: &str,
    role: Role,
    session_id: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let principal = Principal {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        session_id: session_id.to_string(),
        exp: now + jwt_config.access_token_expiry,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &principal,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded principal.
///
/// Only HS256 is accepted. `exp` is required and checked with the configured
/// leeway.
///
/// # Errors
///
/// Returns [`VerificationError::Invalid`] if:
/// - The token signature is invalid
/// - The token has expired
/// - The token is malformed or its claims do not describe a [`Principal`]
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Principal, VerificationError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = jwt_config.leeway_seconds;

    decode::<Principal>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| VerificationError::Invalid(e.to_string()))
}

/// [`TokenVerifier`] backed by a shared HMAC secret.
///
/// Verification is local, so this verifier never reports
/// [`VerificationError::Unavailable`].
#[derive(Clone)]
pub struct JwtVerifier {
    config: JwtConfig,
}

impl JwtVerifier {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("leeway_seconds", &self.config.leeway_seconds)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, VerificationError> {
        verify_token(token, &self.config)
    }
}
