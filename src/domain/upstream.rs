//! Upstream client trait and error types.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to an upstream NASA API.
///
/// Details carried here are for server-side logging only; handlers collapse
/// every variant into the endpoint's fixed failure message before responding.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status code.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The response body was not the JSON document we expected.
    #[error("upstream response could not be decoded: {0}")]
    Decode(String),
}

/// Result type for upstream operations.
pub type UpstreamResult = Result<Value, UpstreamError>;

/// Client interface for the three proxied NASA APIs.
///
/// Implementations relay query parameters as given — no validation, no
/// reshaping — and return the upstream JSON body verbatim. The shared API key
/// is a construction-time concern of the implementation, not a per-call
/// argument.
///
/// # Implementations
///
/// - [`crate::infrastructure::nasa::NasaClient`] - reqwest-based HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NasaApi: Send + Sync {
    /// Fetches the Astronomy Picture of the Day.
    ///
    /// `date` is forwarded as-is when present; when absent the upstream
    /// defaults to the current day.
    async fn apod<'a>(&self, date: Option<&'a str>) -> UpstreamResult;

    /// Fetches natural events from EONET.
    ///
    /// `days` and `status` are always sent; `category` only when present.
    async fn eonet_events<'a>(
        &self,
        days: &'a str,
        status: &'a str,
        category: Option<&'a str>,
    ) -> UpstreamResult;

    /// Fetches the NeoWs feed for a date window.
    ///
    /// Absent bounds are omitted from the upstream query; the upstream's own
    /// rejection then comes back as [`UpstreamError::Status`].
    async fn neo_feed<'a>(
        &self,
        start_date: Option<&'a str>,
        end_date: Option<&'a str>,
    ) -> UpstreamResult;
}
