//! APOD fetch service with the date-fallback policy.

use std::sync::Arc;

use crate::domain::entities::ApodRecord;
use crate::domain::upstream::{NasaApi, UpstreamError};
use crate::error::AppError;
use chrono::NaiveDate;
use serde_json::Value;

/// Fixed message surfaced for any APOD fetch failure.
pub const APOD_FETCH_ERROR: &str = "Failed to fetch APOD data";

/// Note attached when the fallback substituted yesterday's entry.
pub const FALLBACK_NOTE: &str =
    "Today's APOD is not available yet. Showing yesterday's APOD instead.";

/// A fetched APOD entry, with the informational note when the fallback fired.
#[derive(Debug, Clone)]
pub struct ApodFetch {
    pub record: ApodRecord,
    pub note: Option<&'static str>,
}

/// Service for fetching Astronomy Picture of the Day entries.
///
/// Carries the one compensating retry this system has: the catalog publishes
/// the current day's entry with some delay, so a failed fetch for *today* is
/// retried once with yesterday's date. Failures for any other date are
/// reported immediately.
pub struct ApodService {
    upstream: Arc<dyn NasaApi>,
}

impl ApodService {
    /// Creates a new APOD service.
    pub fn new(upstream: Arc<dyn NasaApi>) -> Self {
        Self { upstream }
    }

    /// Relays one APOD fetch verbatim, for the proxy endpoint.
    ///
    /// The date string is forwarded unparsed; whatever the upstream rejects
    /// comes back as the same generic failure as a transport fault.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the fixed message on any failure.
    pub async fn fetch_raw(&self, date: Option<&str>) -> Result<Value, AppError> {
        self.upstream.apod(date).await.map_err(|e| {
            tracing::warn!(error = %e, "APOD upstream failure");
            AppError::upstream(APOD_FETCH_ERROR)
        })
    }

    /// Fetches the entry for `date`, falling back to the previous day when
    /// `date` is the current local date (`today`) and the first fetch fails.
    ///
    /// At most two upstream calls are made; the compensating retry happens
    /// only in the "today" case, and its success is annotated with
    /// [`FALLBACK_NOTE`]. `today` is injected by the caller so the policy can
    /// be exercised without a clock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the fixed message when the fetch
    /// (and the retry, if any) fails.
    pub async fn fetch_with_fallback(
        &self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<ApodFetch, AppError> {
        match self.fetch_record(date).await {
            Ok(record) => Ok(ApodFetch { record, note: None }),
            Err(first) if date == today => {
                let Some(yesterday) = date.pred_opt() else {
                    return Err(AppError::upstream(APOD_FETCH_ERROR));
                };

                tracing::warn!(
                    error = %first,
                    %yesterday,
                    "today's APOD unavailable, retrying with previous day"
                );

                match self.fetch_record(yesterday).await {
                    Ok(record) => Ok(ApodFetch {
                        record,
                        note: Some(FALLBACK_NOTE),
                    }),
                    Err(second) => {
                        tracing::warn!(error = %second, "APOD fallback fetch failed");
                        Err(AppError::upstream(APOD_FETCH_ERROR))
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, %date, "APOD fetch failed");
                Err(AppError::upstream(APOD_FETCH_ERROR))
            }
        }
    }

    async fn fetch_record(&self, date: NaiveDate) -> Result<ApodRecord, UpstreamError> {
        let param = date.format("%Y-%m-%d").to_string();
        let value = self.upstream.apod(Some(&param)).await?;

        serde_json::from_value(value).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
