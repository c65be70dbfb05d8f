//! The access gate.
//!
//! [`AccessGate::authorize`] turns a raw bearer credential and a
//! [`CapabilityRequirement`] into a [`GateOutcome`]:
//!
//! 1. No credential: deny with [`DenialReason::MissingCredential`] without
//!    calling anything.
//! 2. Verify signature and expiry. Any validity failure denies with
//!    [`DenialReason::InvalidToken`].
//! 3. Look up the token's session. Missing or revoked denies with
//!    [`DenialReason::SessionRevoked`].
//! 4. Compare the verified role with the requirement. A mismatch denies with
//!    [`DenialReason::RoleMismatch`] and drops the principal.
//!
//! Transport faults in the verifier or session store are not denials. They
//! surface as [`GateError::DependencyUnavailable`] so callers can tell
//! "not allowed" apart from "cannot decide right now". Nothing is retried.

use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, instrument, warn};

use crate::claims::Principal;
use crate::error::AccessError;
use crate::requirement::CapabilityRequirement;
use crate::session::{SessionState, SessionStore};
use crate::verifier::{TokenVerifier, VerificationError};

/// Why the gate refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    MissingCredential,
    InvalidToken,
    SessionRevoked,
    RoleMismatch,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::MissingCredential => "missing_credential",
            DenialReason::InvalidToken => "invalid_token",
            DenialReason::SessionRevoked => "session_revoked",
            DenialReason::RoleMismatch => "role_mismatch",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a completed authorization decision.
///
/// `Denied` carries only the reason; no identity data leaves the gate on a
/// denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Authorized(Principal),
    Denied(DenialReason),
}

impl GateOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GateOutcome::Authorized(_))
    }

    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            GateOutcome::Authorized(_) => None,
            GateOutcome::Denied(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<Principal, AccessError> {
        match self {
            GateOutcome::Authorized(principal) => Ok(principal),
            GateOutcome::Denied(reason) => Err(reason.into()),
        }
    }
}

/// External service the gate depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    TokenVerifier,
    SessionStore,
}

impl Dependency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dependency::TokenVerifier => "token_verifier",
            Dependency::SessionStore => "session_store",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The gate could not reach a decision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("{dependency} unavailable: {message}")]
    DependencyUnavailable {
        dependency: Dependency,
        message: String,
    },
}

/// Role-based access gate.
///
/// Holds its collaborators behind `Arc`s and no mutable state, so a single
/// gate is cloned into every request handler and evaluated concurrently.
#[derive(Clone)]
pub struct AccessGate {
    verifier: Arc<dyn TokenVerifier>,
    sessions: Arc<dyn SessionStore>,
}

impl fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate")
            .field("session_backend", &self.sessions.backend_name())
            .finish_non_exhaustive()
    }
}

impl AccessGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { verifier, sessions }
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Decides whether `credential` satisfies `requirement`.
    ///
    /// An absent credential and one that is blank after trimming are treated
    /// the same.
    #[instrument(skip_all, fields(requirement = %requirement))]
    pub async fn authorize(
        &self,
        credential: Option<&str>,
        requirement: &CapabilityRequirement,
    ) -> Result<GateOutcome, GateError> {
        let Some(token) = credential.map(str::trim).filter(|t| !t.is_empty()) else {
            debug!("No bearer credential presented");
            return Ok(GateOutcome::Denied(DenialReason::MissingCredential));
        };

        let fingerprint = token_fingerprint(token);

        let principal = match self.verifier.verify(token).await {
            Ok(principal) => principal,
            Err(VerificationError::Invalid(reason)) => {
                debug!(token.fingerprint = %fingerprint, reason = %reason, "Token rejected");
                return Ok(GateOutcome::Denied(DenialReason::InvalidToken));
            }
            Err(VerificationError::Unavailable(message)) => {
                warn!(token.fingerprint = %fingerprint, error = %message, "Token verifier unavailable");
                return Err(GateError::DependencyUnavailable {
                    dependency: Dependency::TokenVerifier,
                    message,
                });
            }
        };

        match self.sessions.lookup_session(&principal.session_id).await {
            Ok(Some(SessionState::Active)) => {}
            Ok(Some(SessionState::Revoked)) | Ok(None) => {
                debug!(
                    token.fingerprint = %fingerprint,
                    session_id = %principal.session_id,
                    "Session revoked or unknown"
                );
                return Ok(GateOutcome::Denied(DenialReason::SessionRevoked));
            }
            Err(e) => {
                warn!(
                    session_id = %principal.session_id,
                    backend = self.sessions.backend_name(),
                    error = %e,
                    "Session store unavailable"
                );
                return Err(GateError::DependencyUnavailable {
                    dependency: Dependency::SessionStore,
                    message: e.to_string(),
                });
            }
        }

        if !requirement.is_satisfied_by(principal.role) {
            debug!(
                user_id = %principal.sub,
                role = %principal.role,
                "Role does not satisfy requirement"
            );
            return Ok(GateOutcome::Denied(DenialReason::RoleMismatch));
        }

        debug!(user_id = %principal.sub, role = %principal.role, "Access granted");
        Ok(GateOutcome::Authorized(principal))
    }

    /// [`authorize`](Self::authorize) flattened into a single error
    /// taxonomy, for the HTTP layer.
    pub async fn authorize_request(
        &self,
        credential: Option<&str>,
        requirement: &CapabilityRequirement,
    ) -> Result<Principal, AccessError> {
        self.authorize(credential, requirement).await?.into_result()
    }
}

/// Short SHA-256 fingerprint of a credential, safe to log.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..8])
}
