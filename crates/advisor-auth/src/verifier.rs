//! Token verifier collaborator.

use async_trait::async_trait;

use crate::claims::Principal;

/// Why a credential could not be turned into a [`Principal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// Bad signature, expired, malformed, or carrying unexpected claims.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// The verifier could not reach whatever it depends on (key server,
    /// remote introspection endpoint). Says nothing about the token itself.
    #[error("verifier unavailable: {0}")]
    Unavailable(String),
}

/// Decodes and validates a bearer credential.
///
/// Implementations must check signature and expiry before returning a
/// principal.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, VerificationError>;
}
