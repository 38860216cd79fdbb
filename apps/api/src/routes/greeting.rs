use axum::extract::State;

use crate::state::AppState;

/// GET /
/// Plain-text greeting, doubles as a liveness probe.
pub async fn greeting_handler(State(state): State<AppState>) -> String {
    format!("Hello {}!", state.config.target)
}
