//! # Server Crate
//!
//! HTTP surface of the movie catalog. Every endpoint is a read-only view
//! over one shared `Arc<Dataset>` built before the listener is bound.
//!
//! ## Routes
//!
//! - `GET /movies`: filtered, sorted, paginated listing
//! - `GET /analytics`: catalog-wide aggregate views
//! - `GET /filters/options`: values usable as listing filters
//! - `GET /health`: liveness probe with the loaded movie count

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use data_loader::Dataset;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod api;
pub mod error;
pub mod images;
pub mod views;

pub use error::{ApiError, Result};
pub use images::{BACKDROP_BASE_URL, POSTER_BASE_URL, image_url};
pub use views::{MovieListResponse, MovieView};

/// Application state shared across HTTP handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable catalog, loaded once at startup
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

/// Build the application router with CORS open to every origin.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/movies", get(api::list_movies))
        .route("/analytics", get(api::get_analytics))
        .route("/filters/options", get(api::get_filter_options))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let movies = state.dataset.len();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving {} movies on http://{}", movies, listener.local_addr()?);
    info!("Health check: http://{}/health", listener.local_addr()?);

    axum::serve(listener, app).await
}
