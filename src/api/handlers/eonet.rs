//! Handler for the EONET proxy endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::api::dto::eonet::EonetQueryParams;
use crate::error::AppError;
use crate::state::AppState;

/// Relays a natural-event query to EONET.
///
/// # Endpoint
///
/// `GET /api/nasa/eonet?days=&status=&category=`
///
/// # Query Parameters
///
/// - `days` (default "7"): past-days window, forwarded as-is
/// - `status` (default "open"): event status, forwarded as-is
/// - `category` (optional): category tag; an empty value is not forwarded
///
/// # Response
///
/// The upstream JSON body (`events: [...]`), unchanged. On any upstream
/// failure: `500 {"error": "Failed to fetch EONET events"}`.
pub async fn eonet_handler(
    State(state): State<AppState>,
    Query(params): Query<EonetQueryParams>,
) -> Result<Json<Value>, AppError> {
    let value = state
        .eonet_service
        .fetch_raw(params.days(), params.status(), params.category())
        .await?;

    Ok(Json(value))
}
