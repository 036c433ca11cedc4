//! Handler for the NeoWs proxy endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::api::dto::neo::NeoQueryParams;
use crate::error::AppError;
use crate::state::AppState;

/// Relays a near-earth-object feed query.
///
/// # Endpoint
///
/// `GET /api/nasa/neo?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`
///
/// # Query Parameters
///
/// - `start_date`, `end_date`: the feed window. Required by the upstream but
///   not validated here; a missing bound is simply not forwarded and the
///   upstream's rejection surfaces as the generic failure.
///
/// # Response
///
/// The upstream JSON body (`near_earth_objects: {date: [...]}`), unchanged.
/// On any upstream failure: `500 {"error": "Failed to fetch NEO data"}`.
pub async fn neo_handler(
    State(state): State<AppState>,
    Query(params): Query<NeoQueryParams>,
) -> Result<Json<Value>, AppError> {
    let value = state
        .neo_service
        .fetch_raw(params.start_date.as_deref(), params.end_date.as_deref())
        .await?;

    Ok(Json(value))
}
