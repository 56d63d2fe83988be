//! Application Startup
//!
//! Application building, server lifecycle and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{extract::DefaultBodyLimit, http::StatusCode, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::application::services::{SongService, SongServiceImpl};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgSongRepository;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub songs: Arc<dyn SongService>,
}

impl AppState {
    /// Wire the PostgreSQL repository behind the song service.
    pub fn new(db: PgPool) -> Self {
        let song_repo = Arc::new(PgSongRepository::new(db.clone()));
        Self {
            songs: Arc::new(SongServiceImpl::new(song_repo)),
            db,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    db: PgPool,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db).await?;

        let state = AppState::new(db.clone());
        let router = build_router(state, &settings);

        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            db,
        })
    }

    /// Serve requests until SIGINT/SIGTERM, then drain and close the pool
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("HTTP server shut down");

        self.db.close().await;
        tracing::info!("Database connection pool closed");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Router with the full middleware stack
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state)
        .layer(DefaultBodyLimit::max(settings.server.body_limit_bytes))
        .layer(request_timeout_layer(settings.server.request_timeout()))
        .layer(create_trace_layer())
        .layer(create_cors_layer(&settings.cors))
}

/// Requests still running after `timeout` are answered with 408.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down");
}
