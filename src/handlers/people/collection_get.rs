// handlers/people/collection_get.rs - GET /people handler
use axum::extract::State;

use crate::middleware::{ApiResponse, ApiResult};
use crate::models::Person;
use crate::routes::AppState;

/// GET /people - every stored person, in no particular order
pub async fn collection_get(State(state): State<AppState>) -> ApiResult<Vec<Person>> {
    Ok(ApiResponse::success(state.people.list_all()))
}
