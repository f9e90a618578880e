//! Health check handler.

use axum::Json;

/// GET /health — bare body, no auth, no envelope.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
