//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Liveness response
#[derive(Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
}

/// GET / - never touches the database
async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Service is running",
    })
}

/// Liveness routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
