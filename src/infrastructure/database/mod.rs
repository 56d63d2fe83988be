//! Database Module
//!
//! PostgreSQL connection pool and schema migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseSettings;

/// Create a PostgreSQL connection pool and verify it can connect.
pub async fn create_pool(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        user = %settings.username,
        db = %settings.name,
        "Initializing PostgreSQL connection"
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect_with(settings.connect_options()?)
        .await?;

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Starting database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
