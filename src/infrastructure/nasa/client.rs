//! reqwest-backed implementation of the upstream client trait.

use crate::config::Config;
use crate::domain::upstream::{NasaApi, UpstreamError, UpstreamResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// HTTP client for the three NASA APIs.
///
/// Holds one shared connection pool and the API key injected at construction;
/// handlers never touch the credential. EONET takes no key and is not sent
/// one. Each call carries the configured total timeout, so a hung upstream
/// fails the one affected request.
pub struct NasaClient {
    http: reqwest::Client,
    api_key: String,
    apod_url: Url,
    eonet_url: Url,
    neo_url: Url,
}

impl NasaClient {
    /// Builds the client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an upstream URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            api_key: config.nasa_api_key.clone(),
            apod_url: Url::parse(&config.apod_api_url).context("Invalid APOD_API_URL")?,
            eonet_url: Url::parse(&config.eonet_api_url).context("Invalid EONET_API_URL")?,
            neo_url: Url::parse(&config.neo_api_url).context("Invalid NEO_API_URL")?,
        })
    }

    /// Issues one GET and decodes the body as JSON.
    ///
    /// `endpoint` is a log label; the full URL is never logged because it may
    /// carry the API key.
    async fn get_json(&self, endpoint: &'static str, url: Url) -> UpstreamResult {
        tracing::debug!(endpoint, "requesting upstream");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl NasaApi for NasaClient {
    async fn apod<'a>(&self, date: Option<&'a str>) -> UpstreamResult {
        let mut url = self.apod_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            if let Some(date) = date {
                query.append_pair("date", date);
            }
        }

        self.get_json("apod", url).await
    }

    async fn eonet_events<'a>(
        &self,
        days: &'a str,
        status: &'a str,
        category: Option<&'a str>,
    ) -> UpstreamResult {
        let mut url = self.eonet_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("days", days);
            query.append_pair("status", status);
            if let Some(category) = category {
                query.append_pair("category", category);
            }
        }

        self.get_json("eonet", url).await
    }

    async fn neo_feed<'a>(
        &self,
        start_date: Option<&'a str>,
        end_date: Option<&'a str>,
    ) -> UpstreamResult {
        let mut url = self.neo_url.clone();
        {
            let mut query = url.query_pairs_mut();
            if let Some(start) = start_date {
                query.append_pair("start_date", start);
            }
            if let Some(end) = end_date {
                query.append_pair("end_date", end);
            }
            query.append_pair("api_key", &self.api_key);
        }

        self.get_json("neo", url).await
    }
}
