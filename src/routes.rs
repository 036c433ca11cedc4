//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET /`            - Explorer pages (home, /apod, /eonet, /neo)
//! - `GET /health`      - Health check
//! - `/api/nasa/*`      - NASA proxy endpoints
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, so external frontends can consume the proxy
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .nest("/api/nasa", api::routes::nasa_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
