//! API module
//!
//! Contains HTTP request handlers and the router wiring them together.

pub mod health;
pub mod info;
pub mod persons;

use crate::middleware::log_request;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the application router
///
/// Paths that no route matches are served from `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/info", get(info::info))
        .route("/api/health", get(health::health_check))
        .route(
            "/api/persons",
            get(persons::list_persons).post(persons::create_person),
        )
        .route(
            "/api/persons/:id",
            get(persons::get_person).delete(persons::delete_person),
        )
        // Static files are only consulted when no route matches, so `/info`
        // shadows a file of the same name in `static_dir`
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        // Middleware (order matters - request logging should be first)
        .layer(axum::middleware::from_fn(log_request))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
