use serde::Serialize;
use utoipa::ToSchema;

/// Paths of the main endpoints, as advertised by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointDirectory {
    pub protected: String,
    pub admin_only: String,
    pub faculty_or_admin: String,
    pub student_data: String,
    pub health: String,
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointDirectory,
}
