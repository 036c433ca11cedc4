//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and service state, then runs the Axum server.

use crate::config::Config;
use crate::infrastructure::nasa::NasaClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The upstream NASA client (API key injected here, nowhere else)
/// - Shared application state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = NasaClient::new(&config)?;
    let state = AppState::new(Arc::new(client));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
