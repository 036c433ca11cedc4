//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// This service has no backends of its own to probe (checking the upstream
/// would spend rate-limited quota), so health is process liveness plus the
/// running version.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
