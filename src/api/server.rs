//! HTTP server lifecycle: bind, mount the API router, serve until the
//! process is stopped.

use axum::Router;

use crate::api::{visa_api_router, AppState};

pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let app = Router::new().nest("/api", visa_api_router(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "API server listening");

    axum::serve(listener, app).await
}
