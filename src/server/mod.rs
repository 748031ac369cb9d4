//! Server module - HTTP surface for the dashboard

mod handlers;
mod page;

pub use handlers::AppState;

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the dashboard router: the page plus the JSON endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/meta", get(handlers::meta))
        .route("/api/pie", get(handlers::pie))
        .route("/api/scatter", get(handlers::scatter))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("dashboard listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
