//! DTOs for the APOD proxy endpoint.

use serde::Deserialize;

/// Query parameters for `GET /api/nasa/apod`.
#[derive(Debug, Deserialize)]
pub struct ApodQueryParams {
    /// Calendar date string, forwarded to the upstream unparsed. Absent means
    /// "today" upstream.
    pub date: Option<String>,
}
