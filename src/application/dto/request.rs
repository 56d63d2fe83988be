//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{NewSong, Pagination, SongPatch};

/// Default page size for song listings
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Default number of verses per text page
pub const DEFAULT_VERSE_LIMIT: i64 = 5;

/// Add song request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongRequest {
    #[validate(length(min = 1, message = "Group is required"))]
    pub group: String,

    #[validate(length(min = 1, message = "Song is required"))]
    pub song: String,

    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub lyrics: String,

    #[serde(default)]
    pub link: String,
}

impl From<CreateSongRequest> for NewSong {
    fn from(body: CreateSongRequest) -> Self {
        Self {
            group_name: body.group,
            song: body.song,
            release_date: body.release_date,
            text: body.text,
            lyrics: body.lyrics,
            link: body.link,
        }
    }
}

/// Update song request; every field is optional and empty strings are ignored
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongRequest {
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub lyrics: Option<String>,
    pub link: Option<String>,
}

impl From<UpdateSongRequest> for SongPatch {
    fn from(body: UpdateSongRequest) -> Self {
        SongPatch {
            group_name: body.group,
            song: body.song,
            release_date: body.release_date,
            text: body.text,
            lyrics: body.lyrics,
            link: body.link,
        }
        .non_empty()
    }
}

/// Song list query parameters.
///
/// Values are kept as strings so a malformed number falls back to its default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListSongsQuery {
    pub filter: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListSongsQuery {
    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or_default()
    }

    pub fn pagination(&self) -> Pagination {
        fn lenient(value: Option<&str>, default: i64) -> i64 {
            value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        }

        Pagination::new(
            lenient(self.page.as_deref(), Pagination::FIRST_PAGE),
            lenient(self.limit.as_deref(), DEFAULT_LIST_LIMIT),
        )
    }
}

/// Song text query parameters; malformed numbers are rejected by the handler
#[derive(Debug, Default, Deserialize)]
pub struct SongTextQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Song detail lookup parameters
#[derive(Debug, Default, Deserialize)]
pub struct SongInfoQuery {
    pub group: Option<String>,
    pub song: Option<String>,
}
