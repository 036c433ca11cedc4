//! Explorer page route configuration.

use crate::state::AppState;
use crate::web::handlers::{apod_page_handler, eonet_page_handler, home_handler, neo_page_handler};
use axum::{Router, routing::get};

/// The server-rendered pages.
///
/// # Endpoints
///
/// - `GET /`      - Landing page
/// - `GET /apod`  - Astronomy Picture of the Day with date picker
/// - `GET /eonet` - Natural-event tracker with filter dropdowns
/// - `GET /neo`   - Near-earth-object bar chart with date range pickers
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/apod", get(apod_page_handler))
        .route("/eonet", get(eonet_page_handler))
        .route("/neo", get(neo_page_handler))
}
