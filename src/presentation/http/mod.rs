//! HTTP API
//!
//! Route table, request handlers and custom extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
