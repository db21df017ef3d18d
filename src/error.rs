// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::services::ServiceError;
use crate::store::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    InvalidJson(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 413 Payload Too Large
    PayloadTooLarge(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidJson(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::PayloadTooLarge(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Error body as sent on the wire: `{"error": "<message>"}`
    pub fn to_json(&self) -> Value {
        json!({ "error": self.message() })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    /// The 404 sent whenever a dni has no record
    pub fn person_not_found() -> Self {
        ApiError::not_found("Person not found")
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Handlers validate before reaching the store, so this is a bug path
        tracing::error!("Store error: {}", err);
        ApiError::internal_server_error("Internal Server Error")
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(msg) => ApiError::bad_request(msg),
            ServiceError::Store(store_err) => store_err.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::invalid_json("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::person_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::payload_too_large("x").status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_error_body_shape() {
        assert_eq!(
            ApiError::person_not_found().to_json(),
            json!({ "error": "Person not found" })
        );
    }

    #[test]
    fn test_service_errors_map_to_client_or_server_errors() {
        let invalid: ApiError = ServiceError::InvalidArgument("person and dni required".into()).into();
        assert_eq!(invalid, ApiError::bad_request("person and dni required"));

        let store: ApiError =
            ServiceError::Store(StoreError::InvalidArgument("dni must not be empty".into())).into();
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.message(), "Internal Server Error");
    }
}
