use std::net::SocketAddr;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::foundation::error::{MarkError, MarkResult};

pub(crate) mod handlers;
pub(crate) mod pages;
pub(crate) mod state;

pub use state::AppState;

/// Build the site's router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::config_handler))
        .route("/link", get(handlers::link_handler))
        .route("/scenes", get(handlers::scenes_handler))
        .route("/api/mark-snippet", get(handlers::snippet_handler))
        .route("/api/mark-image", get(handlers::image_handler))
        .route("/api/scenes", get(handlers::scenes_catalog_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> MarkResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| MarkError::config(format!("bind {addr}: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| MarkError::config(format!("bind {addr}: {e}")))?;
    tracing::info!(%local, "listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|e| MarkError::Other(e.into()))
}
