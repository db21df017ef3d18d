use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;

/// The `:dni` path segment, rejecting with a JSON 404 instead of axum's
/// plain-text path rejection.
///
/// A segment that does not decode to valid UTF-8 can never name a stored
/// record, so it is reported as not found.
#[derive(Debug, Clone)]
pub struct DniPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for DniPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(dni)) => Ok(DniPath(dni)),
            Err(rejection) => {
                tracing::debug!("undecodable dni segment: {}", rejection.body_text());
                Err(ApiError::person_not_found())
            }
        }
    }
}
