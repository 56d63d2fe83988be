//! # Domain Layer
//!
//! The domain layer contains the core business types of the music library.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Song entity and its repository trait
//! - **value_objects**: Immutable value types (Pagination)
//! - **services**: Pure domain logic (verse pagination)

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
