// handlers/people/collection_post.rs - POST /people handler
use axum::extract::State;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::models::{Person, PersonPayload};
use crate::routes::AppState;
use crate::types::CreateOutcome;

/// POST /people - create a person
///
/// 201 with the stored record, 400 for a malformed body or empty dni,
/// 409 when the dni is already taken (the existing record is left as is).
pub async fn collection_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PersonPayload>,
) -> ApiResult<Person> {
    match state.people.create(payload.into())? {
        CreateOutcome::Created(person) => Ok(ApiResponse::created(person)),
        CreateOutcome::Conflict(existing) => Err(ApiError::conflict(format!(
            "Person with dni '{}' already exists",
            existing.dni
        ))),
    }
}
