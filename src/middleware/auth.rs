use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::{debug, warn};

use advisor_auth::{AccessError, CapabilityRequirement, Principal, Role};
use advisor_core::AppError;

use crate::metrics::track_gate_decision;
use crate::state::AppState;

/// Returns the credential from an `Authorization: Bearer <token>` header.
///
/// A missing header, a non-UTF-8 value, or any other scheme yields `None`,
/// which the gate reports as a missing credential.
pub fn bearer_credential(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credential) = value.trim().split_once(' ')?;

    if scheme.eq_ignore_ascii_case("bearer") {
        Some(credential.trim())
    } else {
        None
    }
}

/// Runs the gate for one request and converts its verdict into a rejection.
pub async fn authorize_parts(
    parts: &Parts,
    state: &AppState,
    requirement: &CapabilityRequirement,
) -> Result<Principal, AppError> {
    let credential = bearer_credential(&parts.headers);
    let result = state
        .gate
        .authorize_request(credential, requirement)
        .await;

    track_gate_decision(&result);

    result.map_err(|err| {
        match &err {
            AccessError::DependencyUnavailable { .. } => {
                warn!(path = %parts.uri.path(), error = %err, "Access decision unavailable")
            }
            _ => debug!(
                path = %parts.uri.path(),
                reason = err.kind(),
                requirement = %requirement,
                "Access denied"
            ),
        }
        AppError::from(err)
    })
}

/// Extractor that runs the gate with no role requirement and provides the
/// verified principal.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn session_id(&self) -> &str {
        &self.0.session_id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal =
            authorize_parts(parts, state, &CapabilityRequirement::Authenticated).await?;

        Ok(AuthUser(principal))
    }
}

/// Creates an extractor that admits only the listed roles.
///
/// The requirement is evaluated by the gate after token and session checks,
/// so a wrong role on an otherwise valid request yields 403.
#[macro_export]
macro_rules! require_roles {
    ($name:ident, [$($role:expr),+ $(,)?]) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl $name {
            pub fn requirement() -> advisor_auth::CapabilityRequirement {
                advisor_auth::CapabilityRequirement::any_of([$($role),+])
            }
        }

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = advisor_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let principal =
                    $crate::middleware::auth::authorize_parts(parts, state, &Self::requirement())
                        .await?;

                Ok($name($crate::middleware::auth::AuthUser(principal)))
            }
        }
    };
}

require_roles!(RequireAdmin, [Role::Admin]);
require_roles!(RequireFacultyOrAdmin, [Role::Faculty, Role::Admin]);
