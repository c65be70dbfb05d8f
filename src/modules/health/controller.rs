use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, instrument};

use advisor_auth::SessionStoreError;

use crate::state::AppState;

use super::model::{HealthResponse, ServiceStatuses};

/// Check the session store connection
///
/// An unreachable store is an outage (503). A store that reports a
/// configuration problem cannot recover on its own and is reported as 500.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "All dependencies reachable", body = HealthResponse),
        (status = 500, description = "Session store misconfigured", body = HealthResponse),
        (status = 503, description = "Session store unreachable", body = HealthResponse)
    ),
    tag = "Service"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.session_store();
    let backend = store.backend_name().to_string();

    let (status, overall, redis) = match store.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected"),
        Err(e @ SessionStoreError::Unavailable(_)) => {
            error!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "disconnected")
        }
        Err(e @ SessionStoreError::Configuration(_)) => {
            error!(error = %e, "Health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "misconfigured", "disconnected")
        }
    };

    let authentication = if status == StatusCode::OK {
        "available"
    } else {
        "unavailable"
    };

    (
        status,
        Json(HealthResponse {
            status: overall.to_string(),
            session_backend: backend,
            services: ServiceStatuses {
                redis: redis.to_string(),
                authentication: authentication.to_string(),
            },
        }),
    )
}
