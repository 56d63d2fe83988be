//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::Song;

/// Song as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: i64,
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub lyrics: String,
    pub link: String,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            group: song.group_name,
            song: song.song,
            release_date: song.release_date,
            text: song.text,
            lyrics: song.lyrics,
            link: song.link,
        }
    }
}

/// Confirmation body for write operations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned when a text page lies past the last verse
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EmptyTextResponse {
    pub text: String,
}

/// Song details returned by `/info`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetailResponse {
    pub release_date: String,
    pub text: String,
    pub link: String,
}
