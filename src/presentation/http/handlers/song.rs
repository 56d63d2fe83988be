//! Song Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::request::DEFAULT_VERSE_LIMIT;
use crate::application::dto::{
    CreateSongRequest, EmptyTextResponse, ListSongsQuery, MessageResponse, SongResponse,
    SongTextQuery, UpdateSongRequest,
};
use crate::application::services::SongError;
use crate::domain::services::{verse_page, VERSE_SEPARATOR};
use crate::domain::{NewSong, Pagination, SongPatch};
use crate::infrastructure::metrics::{self, Outcome, SongOperation};
use crate::presentation::http::extractors::{QueryParams, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn outcome(err: &SongError) -> Outcome {
    match err {
        SongError::NotFound(_) => Outcome::NotFound,
        SongError::Storage(_) => Outcome::Failed,
    }
}

fn parse_song_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| {
        tracing::warn!(id = raw, "Invalid song ID");
        AppError::BadRequest("Invalid song ID".into())
    })
}

/// Parse an optional integer query parameter, rejecting malformed input.
fn parse_number(raw: Option<&str>, default: i64, message: &str) -> Result<i64, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| {
            tracing::warn!(value, "{}", message);
            AppError::BadRequest(message.into())
        }),
    }
}

/// Add a new song
pub async fn add_song(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateSongRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    tracing::info!(
        group = %body.group,
        song = %body.song,
        release_date = %body.release_date,
        "Adding new song"
    );

    let song = state
        .songs
        .add_song(NewSong::from(body))
        .await
        .map_err(|e| {
            metrics::record_song_operation(SongOperation::Add, outcome(&e));
            tracing::error!(error = %e, "Failed to add song");
            AppError::Internal("Failed to add song".into())
        })?;

    metrics::record_song_operation(SongOperation::Add, Outcome::Ok);
    tracing::info!(song_id = song.id, "Song added successfully");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Song added successfully")),
    ))
}

/// List songs with optional filtering and pagination
pub async fn get_songs(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListSongsQuery>,
) -> Result<Json<Vec<SongResponse>>, AppError> {
    let pagination = query.pagination();
    tracing::info!(
        filter = query.filter(),
        page = pagination.page(),
        limit = pagination.limit(),
        "Fetching songs"
    );

    let songs = state
        .songs
        .get_songs(query.filter(), pagination)
        .await
        .map_err(|e| {
            metrics::record_song_operation(SongOperation::List, outcome(&e));
            tracing::error!(error = %e, "Failed to get songs");
            AppError::Internal("Failed to get songs".into())
        })?;

    metrics::record_song_operation(SongOperation::List, Outcome::Ok);
    tracing::info!(count = songs.len(), "Songs retrieved");
    Ok(Json(songs.into_iter().map(SongResponse::from).collect()))
}

/// Get one page of a song's verses
pub async fn get_song_text(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
    QueryParams(query): QueryParams<SongTextQuery>,
) -> Result<Response, AppError> {
    let song_id = parse_song_id(&song_id)?;
    let page = parse_number(query.page.as_deref(), Pagination::FIRST_PAGE, "Invalid page number")?;
    let limit = parse_number(query.limit.as_deref(), DEFAULT_VERSE_LIMIT, "Invalid page size")?;
    let pagination = Pagination::new(page, limit);

    tracing::info!(
        song_id,
        page = pagination.page(),
        limit = pagination.limit(),
        "Fetching song text"
    );

    let text = state
        .songs
        .get_song_text(song_id)
        .await
        .map_err(|e| {
            metrics::record_song_operation(SongOperation::Text, outcome(&e));
            match e {
                SongError::NotFound(_) => {
                    tracing::warn!(song_id, error = %e, "Song not found");
                    AppError::Internal("Song not found".into())
                }
                SongError::Storage(_) => {
                    tracing::error!(song_id, error = %e, "Failed to get text");
                    AppError::Internal("Failed to get text".into())
                }
            }
        })?;

    metrics::record_song_operation(SongOperation::Text, Outcome::Ok);

    match verse_page(&text, pagination) {
        Some(verses) => {
            metrics::record_text_page(verses.split(VERSE_SEPARATOR).count());
            Ok((
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                verses,
            )
                .into_response())
        }
        None => {
            metrics::record_text_page(0);
            tracing::info!(song_id, page = pagination.page(), "Requested page exceeds available verses");
            Ok(Json(EmptyTextResponse::default()).into_response())
        }
    }
}

/// Update the non-empty fields of a song
pub async fn update_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateSongRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let song_id = parse_song_id(&song_id)?;
    let patch = SongPatch::from(body);
    tracing::info!(song_id, ?patch, "Updating song");

    state
        .songs
        .update_song(song_id, patch)
        .await
        .map_err(|e| {
            metrics::record_song_operation(SongOperation::Update, outcome(&e));
            tracing::error!(song_id, error = %e, "Failed to update song");
            AppError::Internal("Failed to update song".into())
        })?;

    metrics::record_song_operation(SongOperation::Update, Outcome::Ok);
    tracing::info!(song_id, "Song updated successfully");
    Ok(Json(MessageResponse::new("Song updated successfully")))
}

/// Delete a song
///
/// A missing song is reported as a server error, like any other failure.
pub async fn delete_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let song_id = parse_song_id(&song_id)?;
    tracing::info!(song_id, "Deleting song");

    state.songs.delete_song(song_id).await.map_err(|e| {
        metrics::record_song_operation(SongOperation::Delete, outcome(&e));
        match &e {
            SongError::NotFound(_) => tracing::warn!(song_id, error = %e, "Failed to delete song"),
            SongError::Storage(_) => tracing::error!(song_id, error = %e, "Failed to delete song"),
        }
        AppError::Internal("Failed to delete song".into())
    })?;

    metrics::record_song_operation(SongOperation::Delete, Outcome::Ok);
    tracing::info!(song_id, "Song deleted successfully");
    Ok(Json(MessageResponse::new("Song deleted successfully")))
}
