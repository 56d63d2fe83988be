//! # Domain Entities
//!
//! Core domain entities. Each entity maps to its database table and carries
//! a repository trait implemented in the infrastructure layer.
//!
//! - **Song**: a song in the library, with its full text and metadata

mod song;

pub use song::{NewSong, Song, SongPatch, SongRepository};

#[cfg(test)]
pub use song::MockSongRepository;
