//! Application Services
//!
//! - **SongService**: add, list, fetch text, update and delete songs

pub mod song_service;

pub use song_service::{SongError, SongService, SongServiceImpl};
