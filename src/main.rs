//! # Music Library
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use music_library::config::Settings;
use music_library::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    music_library::telemetry::init_tracing();

    info!("Starting Music Library...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Application stopped");
    Ok(())
}
