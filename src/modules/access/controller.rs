use axum::Json;
use tracing::instrument;

use crate::middleware::auth::{AuthUser, RequireAdmin, RequireFacultyOrAdmin};

use super::model::{AccessGrantedResponse, UserSummary};

/// Any authenticated user with an active session
#[utoipa::path(
    get,
    path = "/protected",
    responses(
        (status = 200, description = "Access granted", body = AccessGrantedResponse),
        (status = 401, description = "Missing, invalid or revoked credential", body = advisor_core::ErrorResponse),
        (status = 503, description = "Session store unavailable", body = advisor_core::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn protected(auth_user: AuthUser) -> Json<AccessGrantedResponse> {
    Json(AccessGrantedResponse {
        message: "This is a protected endpoint".to_string(),
        user: UserSummary::with_session(&auth_user.0),
    })
}

/// Admin role required
#[utoipa::path(
    get,
    path = "/admin-only",
    responses(
        (status = 200, description = "Admin access granted", body = AccessGrantedResponse),
        (status = 401, description = "Missing, invalid or revoked credential", body = advisor_core::ErrorResponse),
        (status = 403, description = "Role not permitted", body = advisor_core::ErrorResponse),
        (status = 503, description = "Session store unavailable", body = advisor_core::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn admin_only(RequireAdmin(auth_user): RequireAdmin) -> Json<AccessGrantedResponse> {
    Json(AccessGrantedResponse {
        message: "Admin access granted".to_string(),
        user: UserSummary::from_principal(&auth_user.0),
    })
}

/// Faculty or admin role required
#[utoipa::path(
    get,
    path = "/faculty-or-admin",
    responses(
        (status = 200, description = "Faculty or admin access granted", body = AccessGrantedResponse),
        (status = 401, description = "Missing, invalid or revoked credential", body = advisor_core::ErrorResponse),
        (status = 403, description = "Role not permitted", body = advisor_core::ErrorResponse),
        (status = 503, description = "Session store unavailable", body = advisor_core::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn faculty_or_admin(
    RequireFacultyOrAdmin(auth_user): RequireFacultyOrAdmin,
) -> Json<AccessGrantedResponse> {
    Json(AccessGrantedResponse {
        message: "Faculty or admin access granted".to_string(),
        user: UserSummary::from_principal(&auth_user.0),
    })
}
