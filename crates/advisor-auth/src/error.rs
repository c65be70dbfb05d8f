//! Access error taxonomy and its HTTP mapping.
//!
//! | Error                   | Status | Body message              |
//! |-------------------------|--------|---------------------------|
//! | `MissingCredential`     | 401    | Authentication required   |
//! | `InvalidToken`          | 401    | Authentication required   |
//! | `SessionRevoked`        | 401    | Authentication required   |
//! | `RoleMismatch`          | 403    | Access denied             |
//! | `DependencyUnavailable` | 503    | Service unavailable       |
//!
//! The `Display` text is detailed and meant for logs. Clients only ever see
//! the body message, so a response never reveals whether a token was
//! malformed, expired or tied to a revoked session.

use advisor_core::{AppError, StatusCode};

use crate::gate::{DenialReason, Dependency, GateError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("missing bearer credential")]
    MissingCredential,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("session revoked or not found")]
    SessionRevoked,

    #[error("role does not satisfy requirement")]
    RoleMismatch,

    #[error("{dependency} unavailable: {message}")]
    DependencyUnavailable {
        dependency: Dependency,
        message: String,
    },
}

impl AccessError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccessError::MissingCredential
            | AccessError::InvalidToken
            | AccessError::SessionRevoked => StatusCode::UNAUTHORIZED,
            AccessError::RoleMismatch => StatusCode::FORBIDDEN,
            AccessError::DependencyUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AccessError::MissingCredential
            | AccessError::InvalidToken
            | AccessError::SessionRevoked => "Authentication required",
            AccessError::RoleMismatch => "Access denied",
            AccessError::DependencyUnavailable { .. } => "Service unavailable",
        }
    }

    /// Only infrastructure failures are worth retrying; denials are final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AccessError::DependencyUnavailable { .. })
    }

    /// Label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessError::MissingCredential => DenialReason::MissingCredential.as_str(),
            AccessError::InvalidToken => DenialReason::InvalidToken.as_str(),
            AccessError::SessionRevoked => DenialReason::SessionRevoked.as_str(),
            AccessError::RoleMismatch => DenialReason::RoleMismatch.as_str(),
            AccessError::DependencyUnavailable { .. } => "dependency_unavailable",
        }
    }
}

impl From<DenialReason> for AccessError {
    fn from(reason: DenialReason) -> Self {
        match reason {
            DenialReason::MissingCredential => AccessError::MissingCredential,
            DenialReason::InvalidToken => AccessError::InvalidToken,
            DenialReason::SessionRevoked => AccessError::SessionRevoked,
            DenialReason::RoleMismatch => AccessError::RoleMismatch,
        }
    }
}

impl From<GateError> for AccessError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::DependencyUnavailable {
                dependency,
                message,
            } => AccessError::DependencyUnavailable {
                dependency,
                message,
            },
        }
    }
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        let message = anyhow::anyhow!(err.public_message());

        match err {
            AccessError::MissingCredential
            | AccessError::InvalidToken
            | AccessError::SessionRevoked => AppError::unauthorized(message),
            AccessError::RoleMismatch => AppError::forbidden(message),
            AccessError::DependencyUnavailable { .. } => AppError::service_unavailable(message),
        }
    }
}
