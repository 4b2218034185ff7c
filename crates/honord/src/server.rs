//! HTTP server for honord

use crate::routes;
use anyhow::Result;
use axum::Router;
use honor_common::HonorStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: HonorStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: HonorStore) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// Build the full router. Split out so tests can drive it without a socket.
pub fn router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .merge(routes::honor_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}

/// Run the HTTP server until the process is stopped.
pub async fn run(state: AppState, addr: &str, request_timeout: Duration) -> Result<()> {
    let state = Arc::new(state);
    let app = router(state, request_timeout);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
