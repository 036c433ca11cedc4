//! Business logic services for the application layer.

pub mod apod_service;
pub mod eonet_service;
pub mod neo_service;

pub use apod_service::ApodService;
pub use eonet_service::EonetService;
pub use neo_service::NeoService;
