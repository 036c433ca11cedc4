//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns service liveness and version.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
