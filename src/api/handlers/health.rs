//! Health check handler.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Creates the health route.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /api/health - Liveness check with version info.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": crate::pkg_version(),
    }))
}
