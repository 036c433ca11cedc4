//! NeoWs feed service and chart-data preparation.

use std::sync::Arc;

use crate::domain::chart::aggregate_daily_diameters;
use crate::domain::entities::{DateRange, NeoDailyTotals};
use crate::domain::upstream::NasaApi;
use crate::error::AppError;
use serde_json::Value;

/// Fixed message surfaced for any NeoWs fetch failure.
pub const NEO_FETCH_ERROR: &str = "Failed to fetch NEO data";

/// Service for querying the NeoWs feed.
pub struct NeoService {
    upstream: Arc<dyn NasaApi>,
}

impl NeoService {
    /// Creates a new NeoWs service.
    pub fn new(upstream: Arc<dyn NasaApi>) -> Self {
        Self { upstream }
    }

    /// Relays one feed query verbatim, for the proxy endpoint.
    ///
    /// Absent date bounds are forwarded as absent; the upstream's own
    /// rejection is masked by the fixed message, like any other failure.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the fixed message on any failure.
    pub async fn fetch_raw(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value, AppError> {
        self.upstream
            .neo_feed(start_date, end_date)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "NeoWs upstream failure");
                AppError::upstream(NEO_FETCH_ERROR)
            })
    }

    /// Fetches the feed for a validated window and aggregates it for the bar
    /// chart.
    ///
    /// `range` is constructed through [`DateRange::new`], so the 7-day
    /// constraint has already been enforced before any network traffic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the fixed message when the fetch
    /// fails or the feed does not carry the expected structure.
    pub async fn chart(&self, range: &DateRange) -> Result<NeoDailyTotals, AppError> {
        let value = self
            .fetch_raw(Some(&range.start_param()), Some(&range.end_param()))
            .await?;

        let objects = value
            .get("near_earth_objects")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                tracing::warn!("NeoWs feed missing near_earth_objects");
                AppError::upstream(NEO_FETCH_ERROR)
            })?;

        aggregate_daily_diameters(objects).map_err(|e| {
            tracing::warn!(error = %e, "NeoWs feed could not be decoded");
            AppError::upstream(NEO_FETCH_ERROR)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upstream::{MockNasaApi, UpstreamError};
    use chrono::NaiveDate;
    use serde_json::json;

    fn range(start: &str, end: &str) -> DateRange {
        let start: NaiveDate = start.parse().unwrap();
        let end: NaiveDate = end.parse().unwrap();
        DateRange::new(start, end).unwrap()
    }

    fn asteroid(max: f64) -> Value {
        json!({
            "estimated_diameter": {
                "meters": { "estimated_diameter_max": max }
            }
        })
    }

    #[tokio::test]
    async fn test_chart_formats_window_and_aggregates() {
        let mut mock = MockNasaApi::new();
        mock.expect_neo_feed()
            .withf(|start, end| *start == Some("2024-01-01") && *end == Some("2024-01-02"))
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "element_count": 2,
                    "near_earth_objects": {
                        "2024-01-01": [asteroid(10.0), asteroid(15.0)],
                        "2024-01-02": []
                    }
                }))
            });

        let service = NeoService::new(Arc::new(mock));

        let totals = service
            .chart(&range("2024-01-01", "2024-01-02"))
            .await
            .unwrap();

        assert_eq!(totals.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(totals.values, vec![25.0, 0.0]);
    }

    #[tokio::test]
    async fn test_chart_masks_upstream_failure() {
        let mut mock = MockNasaApi::new();
        mock.expect_neo_feed()
            .times(1)
            .returning(|_, _| Err(UpstreamError::Transport("timed out".to_string())));

        let service = NeoService::new(Arc::new(mock));

        let err = service
            .chart(&range("2024-01-01", "2024-01-02"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), NEO_FETCH_ERROR);
    }

    #[tokio::test]
    async fn test_chart_masks_missing_feed_member() {
        let mut mock = MockNasaApi::new();
        mock.expect_neo_feed()
            .times(1)
            .returning(|_, _| Ok(json!({"element_count": 0})));

        let service = NeoService::new(Arc::new(mock));

        let err = service
            .chart(&range("2024-01-01", "2024-01-02"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), NEO_FETCH_ERROR);
    }
}
