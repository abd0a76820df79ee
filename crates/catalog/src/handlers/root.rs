//! Root route handler.

use axum::Json;
use serde_json::{json, Value};

/// Handler for GET /
pub async fn index() -> Json<Value> {
    Json(json!({ "hello": "world" }))
}
