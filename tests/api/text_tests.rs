//! Song Text Pagination API Tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{read_body, read_json, song_payload, TestApp};

/// Three verses separated by escaped blank lines, as stored by older clients.
const ESCAPED_TEXT: &str = "A\\n\\nB\\n\\nC";

async fn app_with_text(text: &str) -> (TestApp, i64) {
    let app = TestApp::new().await;
    let mut payload = song_payload();
    payload.text = text.to_string();
    let song = app.add_song(&payload).await;
    (app, song.id)
}

#[tokio::test]
async fn test_one_verse_per_page() {
    let (app, id) = app_with_text(ESCAPED_TEXT).await;

    for (page, expected) in [(1, "A"), (2, "B"), (3, "C")] {
        let response = app
            .get(&format!("/songs/{id}/text?page={page}&limit=1"))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(read_body(response).await, expected);
    }
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let (app, id) = app_with_text(ESCAPED_TEXT).await;

    let response = app.get(&format!("/songs/{id}/text?page=4&limit=1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = read_json(response).await;
    assert_eq!(json["text"], "");
}

#[tokio::test]
async fn test_default_page_joins_verses() {
    let (app, id) = app_with_text("first\nline\n\nsecond").await;

    let response = app.get(&format!("/songs/{id}/text")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_body(response).await, "first\nline\n\nsecond");
}

#[tokio::test]
async fn test_text_for_missing_song_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/songs/77/text").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = read_json(response).await;
    assert_eq!(json["error"], "Song not found");
}

#[tokio::test]
async fn test_text_storage_failure_is_distinct_from_not_found() {
    let app = TestApp::unavailable().await;

    let response = app.get("/songs/77/text").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = read_json(response).await;
    assert_eq!(json["error"], "Failed to get text");
}

#[tokio::test]
async fn test_text_invalid_id() {
    let app = TestApp::new().await;

    let response = app.get("/songs/x/text").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = read_json(response).await;
    assert_eq!(json["error"], "Invalid song ID");
}

#[tokio::test]
async fn test_text_invalid_page_and_limit() {
    let (app, id) = app_with_text(ESCAPED_TEXT).await;

    let response = app.get(&format!("/songs/{id}/text?page=first")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = read_json(response).await;
    assert_eq!(json["error"], "Invalid page number");

    let response = app.get(&format!("/songs/{id}/text?limit=many")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = read_json(response).await;
    assert_eq!(json["error"], "Invalid page size");
}

#[tokio::test]
async fn test_repeated_text_params_use_first_value() {
    let (app, id) = app_with_text(ESCAPED_TEXT).await;

    let response = app
        .get(&format!("/songs/{id}/text?page=2&page=3&limit=1&limit=1"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_body(response).await, "B");
}
