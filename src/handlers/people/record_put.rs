// handlers/people/record_put.rs - PUT /people/:dni handler
use axum::extract::State;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DniPath, JsonBody};
use crate::models::{Person, PersonPayload};
use crate::routes::AppState;
use crate::types::UpdateOutcome;

/// PUT /people/:dni - replace name and age of an existing person
///
/// The dni in the body is ignored; the path decides which record changes.
pub async fn record_put(
    State(state): State<AppState>,
    DniPath(dni): DniPath,
    JsonBody(payload): JsonBody<PersonPayload>,
) -> ApiResult<Person> {
    match state.people.update(&dni, payload) {
        UpdateOutcome::Updated(person) => Ok(ApiResponse::success(person)),
        UpdateOutcome::NotFound => Err(ApiError::person_not_found()),
    }
}
