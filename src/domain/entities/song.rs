//! Song entity and repository trait.
//!
//! Maps to the `songs` table in the database schema.

use async_trait::async_trait;

use crate::domain::value_objects::Pagination;
use crate::shared::error::AppError;

/// A song stored in the library.
///
/// Maps to the `songs` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - group_name: TEXT NOT NULL
/// - song: TEXT NOT NULL
/// - release_date: TEXT NOT NULL DEFAULT ''
/// - text: TEXT NOT NULL DEFAULT ''
/// - lyrics: TEXT NOT NULL DEFAULT ''
/// - link: TEXT NOT NULL DEFAULT ''
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Storage-assigned identifier, immutable after creation
    pub id: i64,

    /// Performing group or artist
    pub group_name: String,

    /// Song title
    pub song: String,

    /// Free-form release date, e.g. "16.07.2006"
    pub release_date: String,

    /// Full text; verses are separated by a blank line
    pub text: String,

    pub lyrics: String,

    /// External link, stored as given
    pub link: String,
}

/// Field values for a song that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSong {
    pub group_name: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub lyrics: String,
    pub link: String,
}

impl NewSong {
    /// Attach the identifier assigned by storage.
    pub fn into_song(self, id: i64) -> Song {
        Song {
            id,
            group_name: self.group_name,
            song: self.song,
            release_date: self.release_date,
            text: self.text,
            lyrics: self.lyrics,
            link: self.link,
        }
    }
}

/// Partial update of a song.
///
/// `None` leaves the stored value untouched. There is no way to clear a
/// field: an empty string is normalised to `None` by [`SongPatch::non_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongPatch {
    pub group_name: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub lyrics: Option<String>,
    pub link: Option<String>,
}

impl SongPatch {
    /// Drop every field that is absent or empty.
    pub fn non_empty(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            group_name: keep(self.group_name),
            song: keep(self.song),
            release_date: keep(self.release_date),
            text: keep(self.text),
            lyrics: keep(self.lyrics),
            link: keep(self.link),
        }
    }

    /// Column/value pairs to write, in table column order.
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("group_name", &self.group_name),
            ("song", &self.song),
            ("release_date", &self.release_date),
            ("text", &self.text),
            ("lyrics", &self.lyrics),
            ("link", &self.link),
        ]
        .into_iter()
        .filter_map(|(column, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (column, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

/// Repository trait for Song data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Insert a new song and return it with its assigned identifier.
    async fn create(&self, song: &NewSong) -> Result<Song, AppError>;

    /// Songs whose group, title or lyrics contain `filter` (case-insensitive).
    /// An empty filter matches every song.
    async fn find_all(&self, filter: &str, pagination: Pagination) -> Result<Vec<Song>, AppError>;

    /// Full text of a song. `AppError::NotFound` if the id does not exist.
    async fn find_text(&self, id: i64) -> Result<String, AppError>;

    /// Overwrite the fields present in `patch`. An empty patch or an unknown
    /// id both succeed without changing anything.
    async fn update(&self, id: i64, patch: &SongPatch) -> Result<(), AppError>;

    /// Delete a song. `AppError::NotFound` if no row was removed.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
