//! EONET natural-event service.

use std::sync::Arc;

use crate::domain::entities::{EonetEvent, EventFilter};
use crate::domain::upstream::NasaApi;
use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Fixed message surfaced for any EONET fetch failure.
pub const EONET_FETCH_ERROR: &str = "Failed to fetch EONET events";

/// The envelope EONET wraps its event list in.
#[derive(Debug, Deserialize)]
struct EventsEnvelope {
    #[serde(default)]
    events: Vec<EonetEvent>,
}

/// Service for querying the EONET natural-event catalog.
pub struct EonetService {
    upstream: Arc<dyn NasaApi>,
}

impl EonetService {
    /// Creates a new EONET service.
    pub fn new(upstream: Arc<dyn NasaApi>) -> Self {
        Self { upstream }
    }

    /// Relays one event query verbatim, for the proxy endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the fixed message on any failure.
    pub async fn fetch_raw(
        &self,
        days: &str,
        status: &str,
        category: Option<&str>,
    ) -> Result<Value, AppError> {
        self.upstream
            .eonet_events(days, status, category)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "EONET upstream failure");
                AppError::upstream(EONET_FETCH_ERROR)
            })
    }

    /// Fetches events matching `filter`, decoded for the event cards.
    ///
    /// A response without an `events` member yields an empty list rather than
    /// an error, matching the upstream's behavior for windows with no events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the fixed message on any failure.
    pub async fn events(&self, filter: &EventFilter) -> Result<Vec<EonetEvent>, AppError> {
        let days = filter.days_back.to_string();
        let value = self
            .fetch_raw(&days, filter.status.as_str(), filter.category.as_deref())
            .await?;

        let envelope: EventsEnvelope = serde_json::from_value(value).map_err(|e| {
            tracing::warn!(error = %e, "EONET response could not be decoded");
            AppError::upstream(EONET_FETCH_ERROR)
        })?;

        Ok(envelope.events)
    }
}
