use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{admin_only, faculty_or_admin, protected};

pub fn init_access_router() -> Router<AppState> {
    Router::new()
        .route("/protected", get(protected))
        .route("/admin-only", get(admin_only))
        .route("/faculty-or-admin", get(faculty_or_admin))
}
