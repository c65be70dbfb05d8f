use axum::Json;
use tracing::instrument;

use advisor_auth::Role;

use crate::middleware::auth::AuthUser;

use super::model::{StudentData, StudentDataResponse, StudentOverview, StudentRecord};

/// Student data, shaped by the caller's role
///
/// Students receive their own record. Faculty and admins receive the cohort
/// overview.
#[utoipa::path(
    get,
    path = "/student-data",
    responses(
        (status = 200, description = "Role-dependent student data", body = StudentDataResponse),
        (status = 401, description = "Missing, invalid or revoked credential", body = advisor_core::ErrorResponse),
        (status = 503, description = "Session store unavailable", body = advisor_core::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id(), role = %auth_user.role()))]
pub async fn student_data(auth_user: AuthUser) -> Json<StudentDataResponse> {
    let response = match auth_user.role() {
        Role::Student => StudentDataResponse {
            message: "Your student data".to_string(),
            data: StudentData::Own(StudentRecord {
                student_id: auth_user.user_id().to_string(),
                email: auth_user.email().to_string(),
                cgpa: 8.5,
                semester: 6,
                backlogs: 0,
            }),
        },
        Role::Faculty | Role::Admin => StudentDataResponse {
            message: "Student data overview".to_string(),
            data: StudentData::Overview(StudentOverview {
                total_students: 150,
                average_cgpa: 7.8,
                students_with_backlogs: 25,
                current_semester: 6,
            }),
        },
    };

    Json(response)
}
