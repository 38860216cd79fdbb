pub mod greeting;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::greeting_handler))
        .route("/api/resume", post(resume::handle_render_resume))
        .with_state(state)
}
