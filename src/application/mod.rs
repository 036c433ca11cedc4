//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::upstream::NasaApi`] trait and carry
//! the behavior the HTTP layers share: the verbatim proxy relays, the APOD
//! fallback policy, and the NEO chart-data preparation.
//!
//! # Available Services
//!
//! - [`services::apod_service::ApodService`] - APOD relay and fallback fetch
//! - [`services::eonet_service::EonetService`] - EONET event queries
//! - [`services::neo_service::NeoService`] - NeoWs feed queries and chart data

pub mod services;
