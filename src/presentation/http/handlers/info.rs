//! Song Info Handler
//!
//! Fixed song details, as served by the upstream music-info API this service
//! was built against. Not backed by storage.

use axum::Json;

use crate::application::dto::{SongDetailResponse, SongInfoQuery};
use crate::presentation::http::extractors::QueryParams;

const RELEASE_DATE: &str = "16.07.2006";
const LINK: &str = "https://www.youtube.com/watch?v=Xsp3_a-PMTw";
const TEXT: &str = "Ooh baby, don't you know I suffer?\n\
Ooh baby, can you hear me moan?\n\
You caught me under false pretenses\n\
How long before you let me go?\n\
\n\
Ooh\n\
You set my soul alight\n\
Ooh\n\
You set my soul alight";

/// Get song details
pub async fn get_info(QueryParams(query): QueryParams<SongInfoQuery>) -> Json<SongDetailResponse> {
    tracing::debug!(
        group = query.group.as_deref().unwrap_or_default(),
        song = query.song.as_deref().unwrap_or_default(),
        "Song info requested"
    );

    Json(SongDetailResponse {
        release_date: RELEASE_DATE.into(),
        text: TEXT.into(),
        link: LINK.into(),
    })
}
