use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that rejects with an `ApiError` instead of axum's
/// plain-text rejection.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header; any
/// body that parses as `T` is accepted.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::payload_too_large("Request body too large")
            } else {
                ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
            }
        })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::invalid_json(format!("Invalid JSON input: {}", e)))
    }
}
