use std::any::Any;

use axum::{body::Body, http::Response, response::IntoResponse};
use tower_http::catch_panic::ResponseForPanic;

use crate::error::ApiError;

/// Turns a handler panic into a 500 JSON error.
///
/// The panic message is always logged; it only reaches the client when
/// `expose_details` is set.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    pub expose_details: bool,
}

impl PanicResponder {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }

    fn error_for(&self, err: &(dyn Any + Send + 'static)) -> ApiError {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s
        } else {
            "unknown panic payload"
        };

        tracing::error!("Handler panicked: {}", detail);

        if self.expose_details {
            ApiError::internal_server_error(format!("Internal Server Error: {}", detail))
        } else {
            ApiError::internal_server_error("Internal Server Error")
        }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Self::ResponseBody> {
        self.error_for(err.as_ref()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_detail_unless_exposed() {
        let payload: Box<dyn Any + Send> = Box::new("lock poisoned".to_string());

        let hidden = PanicResponder::new(false).error_for(payload.as_ref());
        assert_eq!(hidden.message(), "Internal Server Error");

        let shown = PanicResponder::new(true).error_for(payload.as_ref());
        assert_eq!(shown.message(), "Internal Server Error: lock poisoned");
    }
}
