use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::auth::AppState;

/// Cheap liveness probe: answers 200 while the store connection responds.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping() {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))),
        Err(err) => {
            error!("health probe failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unavailable" })),
            )
        }
    }
}
