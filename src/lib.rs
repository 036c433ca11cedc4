//! # NASA Explorer
//!
//! A small NASA open-data explorer built with Axum: it proxies three public
//! NASA REST APIs (APOD, EONET, NeoWs) through `/api/nasa/*` and renders the
//! same data as server-side pages.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Data model, the NEO aggregation routine,
//!   and the upstream client trait
//! - **Application Layer** ([`application`]) - Proxy relays, the APOD
//!   date-fallback policy, and chart-data preparation
//! - **Infrastructure Layer** ([`infrastructure`]) - The reqwest NASA client
//! - **API Layer** ([`api`]) - Proxy endpoints and health check
//! - **Web Layer** ([`web`]) - Server-rendered explorer pages
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the shared NASA credential (https://api.nasa.gov)
//! export NASA_API_KEY="DEMO_KEY"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ApodService, EonetService, NeoService};
    pub use crate::domain::entities::{ApodRecord, DateRange, EventFilter, MediaType};
    pub use crate::domain::upstream::{NasaApi, UpstreamError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
