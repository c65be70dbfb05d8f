use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use advisor_auth::{Principal, Role};
use advisor_core::ErrorResponse;

use crate::modules::access::model::{AccessGrantedResponse, UserSummary};
use crate::modules::health::model::{HealthResponse, ServiceStatuses};
use crate::modules::index::model::{EndpointDirectory, ServiceInfo};
use crate::modules::students::model::{
    StudentData, StudentDataResponse, StudentOverview, StudentRecord,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::index::controller::root,
        crate::modules::health::controller::health_check,
        crate::modules::access::controller::protected,
        crate::modules::access::controller::admin_only,
        crate::modules::access::controller::faculty_or_admin,
        crate::modules::students::controller::student_data,
    ),
    components(
        schemas(
            Role,
            Principal,
            ErrorResponse,
            ServiceInfo,
            EndpointDirectory,
            HealthResponse,
            ServiceStatuses,
            AccessGrantedResponse,
            UserSummary,
            StudentDataResponse,
            StudentData,
            StudentRecord,
            StudentOverview,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Service", description = "Service information and health"),
        (name = "Access", description = "Role-gated endpoints"),
        (name = "Students", description = "Student data endpoints")
    ),
    info(
        title = "Faculty Advisor API",
        version = "0.1.0",
        description = "Role-based access gate for the Faculty Advisor application. Bearer JWTs are verified, their sessions checked against the session store, and the caller's role compared with each route's requirement.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
