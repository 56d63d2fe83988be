//! # Domain Services
//!
//! Pure functions over domain values that do not belong to a single entity.

pub mod verses;

pub use verses::{split_verses, verse_page, VERSE_SEPARATOR};
