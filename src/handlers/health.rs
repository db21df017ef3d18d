// handlers/health.rs - GET /health handler
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::routes::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "people": state.people.count(),
        "timestamp": chrono::Utc::now(),
    }))
}
