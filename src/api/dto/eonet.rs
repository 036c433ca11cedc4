//! DTOs for the EONET proxy endpoint.

use serde::Deserialize;

/// Query parameters for `GET /api/nasa/eonet`.
///
/// Values are relayed to the upstream as received; only the documented
/// defaults are filled in.
#[derive(Debug, Deserialize)]
pub struct EonetQueryParams {
    pub days: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl EonetQueryParams {
    /// Past-days window to forward, defaulting to "7".
    pub fn days(&self) -> &str {
        self.days.as_deref().unwrap_or("7")
    }

    /// Event status to forward, defaulting to "open".
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("open")
    }

    /// Category to forward; an empty string counts as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
