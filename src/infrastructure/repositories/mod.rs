//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use music_library::infrastructure::repositories::PgSongRepository;
//!
//! fn setup_repositories(pool: PgPool) -> PgSongRepository {
//!     PgSongRepository::new(pool)
//! }
//! ```

pub mod song_repository;

pub use song_repository::PgSongRepository;
