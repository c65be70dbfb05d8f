use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::root;

pub fn init_index_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
