use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatuses {
    /// `connected` or `disconnected`
    pub redis: String,
    /// `available` or `unavailable`
    pub authentication: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy`, `unhealthy` or `misconfigured`
    pub status: String,
    /// Session store backend in use (`redis` or `memory`)
    pub session_backend: String,
    pub services: ServiceStatuses,
}
