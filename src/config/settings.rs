//! Application settings and configuration structures.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, timeouts)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Upper bound on handling a single request, in seconds
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,

    /// Database name
    pub name: String,

    /// libpq-style ssl mode: disable, allow, prefer, require, verify-ca, verify-full
    pub ssl_mode: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. `APP__`-prefixed environment variables
    /// 5. `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSLMODE`,
    ///    `SERVER_HOST`, `SERVER_PORT` / `PORT` (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the database ssl mode is not recognised.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.request_timeout_secs", 10)?
            .set_default("server.body_limit_bytes", 1_048_576_i64)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.username", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.name", "postgres")?
            .set_default("database.ssl_mode", "disable")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=8000 -> server.port = 8000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option(
                "server.port",
                std::env::var("SERVER_PORT")
                    .or_else(|_| std::env::var("PORT"))
                    .ok(),
            )?
            .set_override_option("database.host", std::env::var("DB_HOST").ok())?
            .set_override_option("database.port", std::env::var("DB_PORT").ok())?
            .set_override_option("database.username", std::env::var("DB_USER").ok())?
            .set_override_option("database.password", std::env::var("DB_PASSWORD").ok())?
            .set_override_option("database.name", std::env::var("DB_NAME").ok())?
            .set_override_option("database.ssl_mode", std::env::var("DB_SSLMODE").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.database.ssl_mode()?;
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl DatabaseSettings {
    /// Parse the configured ssl mode.
    pub fn ssl_mode(&self) -> Result<PgSslMode, ConfigError> {
        self.ssl_mode.parse::<PgSslMode>().map_err(|_| {
            ConfigError::Message(format!(
                "Unknown database ssl mode '{}'; expected one of disable, allow, prefer, require, verify-ca, verify-full",
                self.ssl_mode
            ))
        })
    }

    /// Build PostgreSQL connection options from the individual settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode()?))
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout)
    }
}
