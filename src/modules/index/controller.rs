use axum::Json;

use super::model::{EndpointDirectory, ServiceInfo};

pub const SERVICE_NAME: &str = "Faculty Advisor Authentication System";

/// Service name, version and endpoint directory
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "Service"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointDirectory {
            protected: "/protected".to_string(),
            admin_only: "/admin-only".to_string(),
            faculty_or_admin: "/faculty-or-admin".to_string(),
            student_data: "/student-data".to_string(),
            health: "/health".to_string(),
            docs: "/docs".to_string(),
        },
    })
}
