//! PostgreSQL Repository Tests
//!
//! Each test gets a fresh database with migrations applied. Run with a
//! reachable server: `DATABASE_URL=postgres://... cargo test -- --ignored`.

mod song_repository_tests;
