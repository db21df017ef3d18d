// handlers/people/record_delete.rs - DELETE /people/:dni handler
use axum::extract::State;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DniPath};
use crate::routes::AppState;

pub async fn record_delete(
    State(state): State<AppState>,
    DniPath(dni): DniPath,
) -> ApiResult<Value> {
    if state.people.delete(&dni) {
        Ok(ApiResponse::success(json!({ "message": "Deleted" })))
    } else {
        Err(ApiError::person_not_found())
    }
}
