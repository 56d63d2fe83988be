//! Song Service
//!
//! Thin seam between the HTTP handlers and song storage. Each method delegates
//! to the repository unchanged; only the error type is narrowed.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewSong, Pagination, Song, SongPatch, SongRepository};
use crate::shared::error::AppError;

/// Song service trait
#[async_trait]
pub trait SongService: Send + Sync {
    /// Add a song to the library
    async fn add_song(&self, song: NewSong) -> Result<Song, SongError>;

    /// List songs matching `filter`, one page at a time
    async fn get_songs(&self, filter: &str, pagination: Pagination) -> Result<Vec<Song>, SongError>;

    /// Full text of a song
    async fn get_song_text(&self, id: i64) -> Result<String, SongError>;

    /// Overwrite the non-empty fields of `patch`
    async fn update_song(&self, id: i64, patch: SongPatch) -> Result<(), SongError>;

    /// Remove a song
    async fn delete_song(&self, id: i64) -> Result<(), SongError>;
}

/// Song service errors
#[derive(Debug, thiserror::Error)]
pub enum SongError {
    #[error("Song with id {0} not found")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SongError {
    fn from_repository(id: i64, err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => SongError::NotFound(id),
            e => SongError::Storage(e.to_string()),
        }
    }

    fn storage(err: AppError) -> Self {
        SongError::Storage(err.to_string())
    }
}

/// SongService implementation
pub struct SongServiceImpl<R>
where
    R: SongRepository,
{
    song_repo: Arc<R>,
}

impl<R> SongServiceImpl<R>
where
    R: SongRepository,
{
    pub fn new(song_repo: Arc<R>) -> Self {
        Self { song_repo }
    }
}

#[async_trait]
impl<R> SongService for SongServiceImpl<R>
where
    R: SongRepository + 'static,
{
    async fn add_song(&self, song: NewSong) -> Result<Song, SongError> {
        self.song_repo.create(&song).await.map_err(SongError::storage)
    }

    async fn get_songs(&self, filter: &str, pagination: Pagination) -> Result<Vec<Song>, SongError> {
        self.song_repo
            .find_all(filter, pagination)
            .await
            .map_err(SongError::storage)
    }

    async fn get_song_text(&self, id: i64) -> Result<String, SongError> {
        self.song_repo
            .find_text(id)
            .await
            .map_err(|e| SongError::from_repository(id, e))
    }

    async fn update_song(&self, id: i64, patch: SongPatch) -> Result<(), SongError> {
        self.song_repo
            .update(id, &patch)
            .await
            .map_err(|e| SongError::from_repository(id, e))
    }

    async fn delete_song(&self, id: i64) -> Result<(), SongError> {
        self.song_repo
            .delete(id)
            .await
            .map_err(|e| SongError::from_repository(id, e))
    }
}
