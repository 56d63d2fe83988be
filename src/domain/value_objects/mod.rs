//! # Value Objects
//!
//! Immutable value types used across the domain.

mod pagination;

pub use pagination::Pagination;
