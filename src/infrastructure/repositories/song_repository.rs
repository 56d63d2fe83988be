//! Song Repository Implementation
//!
//! PostgreSQL implementation of the SongRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{NewSong, Pagination, Song, SongPatch, SongRepository};
use crate::infrastructure::metrics::{self, SongQuery};
use crate::shared::error::AppError;

/// Database row representation of the songs table.
#[derive(Debug, sqlx::FromRow)]
struct SongRow {
    id: i64,
    group_name: String,
    song: String,
    release_date: String,
    text: String,
    lyrics: String,
    link: String,
}

impl SongRow {
    fn into_song(self) -> Song {
        Song {
            id: self.id,
            group_name: self.group_name,
            song: self.song,
            release_date: self.release_date,
            text: self.text,
            lyrics: self.lyrics,
            link: self.link,
        }
    }
}

/// `ILIKE` pattern matching `filter` literally anywhere in a column.
fn contains_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `UPDATE` statement touching only the fields present in `patch`, or `None`
/// if there is nothing to write.
fn update_statement(id: i64, patch: &SongPatch) -> Option<QueryBuilder<'_, Postgres>> {
    let assignments = patch.assignments();
    if assignments.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("UPDATE songs SET ");
    let mut set = builder.separated(", ");
    for (column, value) in assignments {
        set.push(format!("{} = ", column));
        set.push_bind_unseparated(value);
    }
    builder.push(" WHERE id = ").push_bind(id);
    Some(builder)
}

/// PostgreSQL song repository implementation.
#[derive(Clone)]
pub struct PgSongRepository {
    pool: PgPool,
}

impl PgSongRepository {
    /// Create a new PgSongRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for PgSongRepository {
    async fn create(&self, song: &NewSong) -> Result<Song, AppError> {
        let started = Instant::now();
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO songs (group_name, song, release_date, text, lyrics, link)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&song.group_name)
        .bind(&song.song)
        .bind(&song.release_date)
        .bind(&song.text)
        .bind(&song.lyrics)
        .bind(&song.link)
        .fetch_one(&self.pool)
        .await;
        metrics::record_song_query(SongQuery::Insert, started);

        let id = result.map_err(|e| {
            tracing::error!(
                group = %song.group_name,
                song = %song.song,
                release_date = %song.release_date,
                error = %e,
                "Failed to add song"
            );
            AppError::Database(e)
        })?;

        tracing::debug!(song_id = id, group = %song.group_name, song = %song.song, "Song added");
        Ok(song.clone().into_song(id))
    }

    async fn find_all(&self, filter: &str, pagination: Pagination) -> Result<Vec<Song>, AppError> {
        let offset = pagination.offset();
        tracing::debug!(
            filter,
            page = pagination.page(),
            limit = pagination.limit(),
            offset,
            "Fetching songs"
        );

        let started = Instant::now();
        let rows = sqlx::query_as::<_, SongRow>(
            r#"
            SELECT id, group_name, song, release_date, text, lyrics, link
            FROM songs
            WHERE $1 = ''
               OR group_name ILIKE $2
               OR song ILIKE $2
               OR lyrics ILIKE $2
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter)
        .bind(contains_pattern(filter))
        .bind(pagination.limit())
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        metrics::record_song_query(SongQuery::List, started);

        let rows = rows.map_err(|e| {
            tracing::error!(filter, error = %e, "Failed to fetch songs");
            AppError::Database(e)
        })?;

        tracing::debug!(retrieved = rows.len(), filter, "Songs retrieved");
        Ok(rows.into_iter().map(SongRow::into_song).collect())
    }

    async fn find_text(&self, id: i64) -> Result<String, AppError> {
        let started = Instant::now();
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM songs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await;
        metrics::record_song_query(SongQuery::Exists, started);

        let exists = exists.map_err(|e| {
            tracing::error!(song_id = id, error = %e, "Failed to check if song exists");
            AppError::Database(e)
        })?;
        if !exists {
            tracing::warn!(song_id = id, "Song does not exist");
            return Err(AppError::NotFound(format!("Song with id {} not found", id)));
        }

        // The row can disappear between the two statements.
        let started = Instant::now();
        let text = sqlx::query_scalar::<_, String>("SELECT text FROM songs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        metrics::record_song_query(SongQuery::Text, started);

        let text = text
            .map_err(|e| {
                tracing::error!(song_id = id, error = %e, "Failed to get text");
                AppError::Database(e)
            })?
            .ok_or_else(|| {
                tracing::warn!(song_id = id, "No text found for song");
                AppError::NotFound(format!("No text found for song id {}", id))
            })?;

        tracing::debug!(song_id = id, length = text.len(), "Song text retrieved");
        Ok(text)
    }

    async fn update(&self, id: i64, patch: &SongPatch) -> Result<(), AppError> {
        let Some(mut statement) = update_statement(id, patch) else {
            tracing::warn!(song_id = id, "No fields provided for update");
            return Ok(());
        };
        let fields: Vec<&str> = patch.assignments().into_iter().map(|(c, _)| c).collect();
        tracing::debug!(song_id = id, ?fields, "Executing update");

        let started = Instant::now();
        let result = statement.build().execute(&self.pool).await;
        metrics::record_song_query(SongQuery::Update, started);

        let result = result.map_err(|e| {
            tracing::error!(song_id = id, error = %e, "Failed to update song");
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            tracing::debug!(song_id = id, "Update matched no rows");
        } else {
            tracing::info!(song_id = id, ?fields, "Song updated");
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(song_id = id, "Deleting song");

        let started = Instant::now();
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        metrics::record_song_query(SongQuery::Delete, started);

        let result = result.map_err(|e| {
            tracing::error!(song_id = id, error = %e, "Failed to delete song");
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            tracing::warn!(song_id = id, "No song found with the given id");
            return Err(AppError::NotFound(format!("Song with id {} not found", id)));
        }

        tracing::info!(song_id = id, "Song deleted");
        Ok(())
    }
}
