use std::sync::Arc;

use crate::application::services::{ApodService, EonetService, NeoService};
use crate::domain::upstream::NasaApi;

/// Shared application state injected into all handlers.
///
/// Everything here is immutable after startup; requests share the services
/// (and through them one upstream client) without any locking.
#[derive(Clone)]
pub struct AppState {
    pub apod_service: Arc<ApodService>,
    pub eonet_service: Arc<EonetService>,
    pub neo_service: Arc<NeoService>,
}

impl AppState {
    /// Builds the service set over one shared upstream client.
    pub fn new(upstream: Arc<dyn NasaApi>) -> Self {
        Self {
            apod_service: Arc::new(ApodService::new(upstream.clone())),
            eonet_service: Arc::new(EonetService::new(upstream.clone())),
            neo_service: Arc::new(NeoService::new(upstream)),
        }
    }
}
