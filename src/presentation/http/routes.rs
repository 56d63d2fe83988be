//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::State,
    http::header,
    middleware,
    response::IntoResponse,
    routing::{get, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(song_routes())
        .route("/info", get(handlers::info::get_info))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Song routes; the collection answers with and without a trailing slash
fn song_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/songs/",
            get(handlers::song::get_songs).post(handlers::song::add_song),
        )
        .route(
            "/songs",
            get(handlers::song::get_songs).post(handlers::song::add_song),
        )
        .route("/songs/{id}/text", get(handlers::song::get_song_text))
        .route(
            "/songs/{id}",
            put(handlers::song::update_song).delete(handlers::song::delete_song),
        )
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let idle = state.db.num_idle() as u32;
    let size = state.db.size();
    metrics::update_db_pool_stats(
        idle,
        size.saturating_sub(idle),
        state.db.options().get_max_connections(),
    );

    let body = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
