// handlers/people/record_get.rs - GET /people/:dni handler
use axum::extract::State;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DniPath};
use crate::models::Person;
use crate::routes::AppState;

pub async fn record_get(
    State(state): State<AppState>,
    DniPath(dni): DniPath,
) -> ApiResult<Person> {
    state
        .people
        .get_by_dni(&dni)
        .map(ApiResponse::success)
        .ok_or_else(ApiError::person_not_found)
}
