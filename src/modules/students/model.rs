use serde::Serialize;
use utoipa::ToSchema;

/// A student's own academic record.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentRecord {
    pub student_id: String,
    pub email: String,
    pub cgpa: f64,
    pub semester: u32,
    pub backlogs: u32,
}

/// Cohort-wide figures shown to faculty and admins.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentOverview {
    pub total_students: u32,
    pub average_cgpa: f64,
    pub students_with_backlogs: u32,
    pub current_semester: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum StudentData {
    Own(StudentRecord),
    Overview(StudentOverview),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDataResponse {
    pub message: String,
    pub data: StudentData,
}
