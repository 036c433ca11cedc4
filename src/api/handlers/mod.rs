//! HTTP request handlers for API endpoints.

pub mod apod;
pub mod eonet;
pub mod health;
pub mod neo;

pub use apod::apod_handler;
pub use eonet::eonet_handler;
pub use health::health_handler;
pub use neo::neo_handler;
