//! DTOs for the NeoWs proxy endpoint.

use serde::Deserialize;

/// Query parameters for `GET /api/nasa/neo`.
///
/// Both bounds are required by the upstream but deliberately not validated
/// here: an incomplete request goes upstream and its rejection comes back as
/// the generic failure response.
#[derive(Debug, Deserialize)]
pub struct NeoQueryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
