//! Users API HTTP layer.
//!
//! Exposes the user directory under `/api/v1/users` behind HTTP Basic
//! authentication, with mutations restricted to administrators.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use tracing::info;

use common::ServiceConfig;

pub use crate::routes::create_router;
pub use crate::state::AppState;

/// Bind the configured address and serve the API until the process stops.
pub async fn serve(config: &ServiceConfig, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    info!("{} listening on {}", config.service_name, listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
