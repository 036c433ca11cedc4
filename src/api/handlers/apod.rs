//! Handler for the APOD proxy endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::api::dto::apod::ApodQueryParams;
use crate::error::AppError;
use crate::state::AppState;

/// Relays an Astronomy Picture of the Day fetch.
///
/// # Endpoint
///
/// `GET /api/nasa/apod?date=YYYY-MM-DD`
///
/// # Query Parameters
///
/// - `date` (optional): calendar date, forwarded as-is; absent means the
///   upstream picks the current day
///
/// # Response
///
/// The upstream JSON body, unchanged. On any upstream failure:
/// `500 {"error": "Failed to fetch APOD data"}`.
pub async fn apod_handler(
    State(state): State<AppState>,
    Query(params): Query<ApodQueryParams>,
) -> Result<Json<Value>, AppError> {
    let value = state.apod_service.fetch_raw(params.date.as_deref()).await?;

    Ok(Json(value))
}
