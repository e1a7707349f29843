//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::FromRef, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::error;
use crate::models::FormatRegistry;
use crate::services::{Clock, TimeFormatter};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub formatter: Arc<TimeFormatter>,
}

impl FromRef<AppState> for Arc<TimeFormatter> {
    fn from_ref(state: &AppState) -> Self {
        state.formatter.clone()
    }
}

/// Create application state with the built-in registry and the given clock.
pub fn create_app_state(clock: Arc<dyn Clock>) -> AppState {
    let registry = Arc::new(FormatRegistry::builtin());
    tracing::debug!(formats = registry.len(), "Format registry initialized");

    AppState {
        formatter: Arc::new(TimeFormatter::new(registry, clock)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Unmatched paths fall through to the 404 guidance handler; bodiless
/// framework errors such as 405 get a `{detail}` JSON body.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::handle_root))
        .route("/format_time/:format_code", get(api::handle_format_time))
        .route("/formats", get(api::handle_formats))
        .route("/healthz", get(api::handle_health))
        .fallback(api::handle_not_found)
        .with_state(state)
        .layer(middleware::map_response(error::detail_envelope))
        .layer(TraceLayer::new_for_http())
}

/// Build the full application, optionally with Swagger UI at `/docs`.
pub fn build_app(state: AppState, docs: bool) -> Router {
    let router = build_router(state);
    if docs {
        router.merge(SwaggerUi::new("/docs").url("/openapi.json", api::ApiDoc::openapi()))
    } else {
        router
    }
}
