//! # Music Library
//!
//! A REST service for managing a library of songs:
//! - Add, list (filtered and paginated), update and delete songs
//! - Fetch a song's text one page of verses at a time
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Song entity, repository trait, pagination and verse logic
//! - **Application Layer**: Song service and DTOs
//! - **Infrastructure Layer**: PostgreSQL repository, migrations, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! music_library/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
