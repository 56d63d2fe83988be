//! Health, Info and Metrics API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{read_body, read_json, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = read_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new().await;

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::new().await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = read_json(response).await;
    assert_eq!(json["checks"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_info_returns_fixed_details() {
    let app = TestApp::new().await;

    let response = app.get("/info?group=Muse&song=Supermassive%20Black%20Hole").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = read_json(response).await;
    assert_eq!(json["releaseDate"], "16.07.2006");
    assert_eq!(json["link"], "https://www.youtube.com/watch?v=Xsp3_a-PMTw");
    assert!(json["text"].as_str().unwrap().starts_with("Ooh baby"));
}

#[tokio::test]
async fn test_metrics_count_requests() {
    let app = TestApp::new().await;
    app.get("/songs/").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_body(response).await;
    assert!(body.contains("music_library_http_requests_total"));
}

#[tokio::test]
async fn test_metrics_report_song_operation_outcomes() {
    let app = TestApp::new().await;
    app.get("/songs/77/text").await;
    app.delete("/songs/77").await;

    let body = read_body(app.get("/metrics").await).await;

    assert!(body.contains(r#"music_library_song_operations_total{operation="text",outcome="not_found"}"#));
    assert!(body.contains(r#"music_library_song_operations_total{operation="delete",outcome="not_found"}"#));
    assert!(body.contains(r#"music_library_http_requests_total{method="GET",route="/songs/{id}/text""#));
}
