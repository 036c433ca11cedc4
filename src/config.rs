//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `NASA_API_KEY` - shared credential for the rate-limited NASA APIs
//!   (get one at <https://api.nasa.gov>; `DEMO_KEY` works for light use)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `APOD_API_URL` - APOD endpoint (default: the NASA-hosted one)
//! - `EONET_API_URL` - EONET events endpoint (default: the NASA-hosted one)
//! - `NEO_API_URL` - NeoWs feed endpoint (default: the NASA-hosted one)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Total timeout per outbound call (default: 30)
//!
//! The upstream URLs exist so tests and local mock servers can redirect
//! outbound traffic; production deployments leave them alone.

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default upstream endpoints, matching the public NASA-hosted APIs.
pub const DEFAULT_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_EONET_URL: &str = "https://eonet.gsfc.nasa.gov/api/v3/events";
pub const DEFAULT_NEO_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared NASA API key, injected into the upstream client at construction.
    pub nasa_api_key: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub apod_api_url: String,
    pub eonet_api_url: String,
    pub neo_api_url: String,
    /// Total timeout applied to each outbound upstream call, in seconds.
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `NASA_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let nasa_api_key = env::var("NASA_API_KEY").context("NASA_API_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let apod_api_url =
            env::var("APOD_API_URL").unwrap_or_else(|_| DEFAULT_APOD_URL.to_string());
        let eonet_api_url =
            env::var("EONET_API_URL").unwrap_or_else(|_| DEFAULT_EONET_URL.to_string());
        let neo_api_url = env::var("NEO_API_URL").unwrap_or_else(|_| DEFAULT_NEO_URL.to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            nasa_api_key,
            listen_addr,
            log_level,
            log_format,
            apod_api_url,
            eonet_api_url,
            neo_api_url,
            upstream_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API key is empty
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - an upstream URL is unparsable or not http(s)
    /// - the upstream timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.nasa_api_key.trim().is_empty() {
            anyhow::bail!("NASA_API_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, value) in [
            ("APOD_API_URL", &self.apod_api_url),
            ("EONET_API_URL", &self.eonet_api_url),
            ("NEO_API_URL", &self.neo_api_url),
        ] {
            let url = Url::parse(value)
                .with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("{} must use http or https, got '{}'", name, value);
            }
        }

        if self.upstream_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without the credential).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  APOD upstream: {}", self.apod_api_url);
        tracing::info!("  EONET upstream: {}", self.eonet_api_url);
        tracing::info!("  NeoWs upstream: {}", self.neo_api_url);
        tracing::info!("  NASA API key: {}", mask_key(&self.nasa_api_key));
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a credential for logging, keeping a short recognizable prefix.
///
/// `DEMO_KEY` is NASA's public sample credential and is shown as-is.
fn mask_key(key: &str) -> String {
    if key == "DEMO_KEY" {
        return key.to_string();
    }

    let prefix: String = key.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            nasa_api_key: "abcd1234".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            apod_api_url: DEFAULT_APOD_URL.to_string(),
            eonet_api_url: DEFAULT_EONET_URL.to_string(),
            neo_api_url: DEFAULT_NEO_URL.to_string(),
            upstream_timeout_seconds: 30,
        }
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcd1234efgh"), "abcd***");
        assert_eq!(mask_key("ab"), "ab***");
        assert_eq!(mask_key("DEMO_KEY"), "DEMO_KEY");
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.nasa_api_key = "  ".to_string();
        assert!(config.validate().is_err());
        config.nasa_api_key = "abcd1234".to_string();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:5000".to_string();

        config.neo_api_url = "not a url".to_string();
        assert!(config.validate().is_err());
        config.neo_api_url = "ftp://example.com/feed".to_string();
        assert!(config.validate().is_err());
        config.neo_api_url = DEFAULT_NEO_URL.to_string();

        config.upstream_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("NASA_API_KEY");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_applies_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("NASA_API_KEY", "test-key");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("APOD_API_URL");
            env::remove_var("UPSTREAM_TIMEOUT_SECONDS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.nasa_api_key, "test-key");
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.apod_api_url, DEFAULT_APOD_URL);
        assert_eq!(config.upstream_timeout_seconds, 30);

        // Cleanup
        unsafe {
            env::remove_var("NASA_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("NASA_API_KEY", "test-key");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("NEO_API_URL", "http://localhost:9999/feed");
            env::set_var("UPSTREAM_TIMEOUT_SECONDS", "5");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.neo_api_url, "http://localhost:9999/feed");
        assert_eq!(config.upstream_timeout_seconds, 5);

        // Cleanup
        unsafe {
            env::remove_var("NASA_API_KEY");
            env::remove_var("LISTEN");
            env::remove_var("NEO_API_URL");
            env::remove_var("UPSTREAM_TIMEOUT_SECONDS");
        }
    }
}
