//! API route configuration.

use crate::api::handlers::{apod_handler, eonet_handler, neo_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// The NASA proxy routes, nested under `/api/nasa`.
///
/// # Endpoints
///
/// - `GET /apod`  - Astronomy Picture of the Day relay
/// - `GET /eonet` - Natural-event catalog relay
/// - `GET /neo`   - Near-earth-object feed relay
pub fn nasa_routes() -> Router<AppState> {
    Router::new()
        .route("/apod", get(apod_handler))
        .route("/eonet", get(eonet_handler))
        .route("/neo", get(neo_handler))
}
