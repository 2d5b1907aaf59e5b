use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::upstream::SourceHost;

pub fn create_router<S: SourceHost + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API Documentation
        .route("/docs", get(handlers::get_api_docs::<S>))
        .route("/docs/openapi.json", get(handlers::get_openapi_spec::<S>))
        // Repository listing
        .route("/repositories", get(handlers::get_repositories::<S>))
}
