//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - PostgreSQL connection pool and migrations
//! - Song repository over PostgreSQL
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
