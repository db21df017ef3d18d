use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ORIGIN, VARY,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::SecurityConfig;

/// Pre-built CORS header values, validated once at router construction.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    max_age: HeaderValue,
}

impl CorsHeaders {
    pub fn from_config(config: &SecurityConfig) -> anyhow::Result<Self> {
        Ok(Self {
            allow_methods: HeaderValue::from_str(&config.cors_allow_methods)?,
            allow_headers: HeaderValue::from_str(&config.cors_allow_headers)?,
            max_age: HeaderValue::from(config.cors_max_age_secs),
        })
    }

    /// Stamp the CORS headers onto a response, echoing the request origin.
    fn apply(&self, headers: &mut HeaderMap, origin: HeaderValue) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(VARY, HeaderValue::from_static("Origin"));
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
        headers.insert(ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
    }
}

/// Permissive CORS for every response, including errors and fallbacks.
///
/// OPTIONS requests on any path are answered here with 204 and never reach
/// the router.
pub async fn cors_middleware(
    State(cors): State<Arc<CorsHeaders>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    cors.apply(response.headers_mut(), origin);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_from_default_config() {
        let cors = CorsHeaders::from_config(&SecurityConfig::default()).unwrap();
        let mut headers = HeaderMap::new();
        cors.apply(&mut headers, HeaderValue::from_static("http://localhost:5173"));

        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:5173");
        assert_eq!(headers[VARY], "Origin");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, PUT, DELETE, OPTIONS");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type, Accept");
        assert_eq!(headers[ACCESS_CONTROL_MAX_AGE], "600");
    }

    #[test]
    fn test_rejects_unencodable_header_values() {
        let config = SecurityConfig {
            cors_allow_methods: "GET\nPOST".to_string(),
            ..SecurityConfig::default()
        };
        assert!(CorsHeaders::from_config(&config).is_err());
    }
}
