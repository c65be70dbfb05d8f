use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::student_data;

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/student-data", get(student_data))
}
