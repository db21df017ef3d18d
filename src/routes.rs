use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{self, people};
use crate::middleware::{cors_middleware, CorsHeaders, PanicResponder};
use crate::services::PersonService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub people: PersonService,
}

/// Full application router: routes plus the global middleware stack.
pub fn app(people: PersonService, config: &AppConfig) -> anyhow::Result<Router> {
    let router = with_middleware(routes(config), config)?;
    Ok(router.with_state(AppState { people }))
}

/// Resource routes mounted under `api.resource_path`, plus `/health`.
pub fn routes(config: &AppConfig) -> Router<AppState> {
    let prefix = config.api.resource_path.as_str();

    let collection = get(people::collection_get)
        .post(people::collection_post)
        .fallback(handlers::not_found);

    let record = get(people::record_get)
        .put(people::record_put)
        .delete(people::record_delete)
        .fallback(handlers::not_found);

    Router::new()
        .route("/health", get(handlers::health))
        .route(prefix, collection.clone())
        .route(&format!("{}/", prefix), collection)
        .route(&format!("{}/:dni", prefix), record)
        .fallback(handlers::not_found)
}

/// Global middleware. Later layers wrap earlier ones, so CORS headers land
/// on panic and body-limit responses too.
pub fn with_middleware(router: Router<AppState>, config: &AppConfig) -> anyhow::Result<Router<AppState>> {
    let cors = Arc::new(CorsHeaders::from_config(&config.security)?);

    let router = router
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(CatchPanicLayer::custom(PanicResponder::new(config.api.expose_internal_errors)))
        .layer(from_fn_with_state(cors, cors_middleware));

    if config.api.enable_request_logging {
        Ok(router.layer(TraceLayer::new_for_http()))
    } else {
        Ok(router)
    }
}
