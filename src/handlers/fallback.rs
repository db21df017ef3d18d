// handlers/fallback.rs - anything no route claims
use crate::error::ApiError;

/// Unknown paths and unsupported methods on known paths both land here.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
