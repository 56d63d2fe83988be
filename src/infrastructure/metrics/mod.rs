//! Prometheus Metrics Module
//!
//! Song library metrics, exposed on `/metrics`.
//!
//! # Metrics Collected
//! - HTTP requests by method, route and status, with latency
//! - Song operations by outcome
//! - Verses served per text page
//! - Latency of each `songs` query
//! - Connection pool gauges

use std::time::Instant;

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, GaugeVec, Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry,
    TextEncoder,
};

const NAMESPACE: &str = "music_library";

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests").namespace(NAMESPACE),
        &["method", "route", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new("http_request_duration_seconds", "HTTP request latency in seconds")
            .namespace(NAMESPACE)
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]),
        &["method", "route"],
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric")
});

/// Song operations by outcome (`ok`, `not_found`, `failed`)
pub static SONG_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("song_operations_total", "Song library operations by outcome")
            .namespace(NAMESPACE),
        &["operation", "outcome"],
    )
    .expect("Failed to create SONG_OPERATIONS_TOTAL metric")
});

/// Verses returned per text page; a page past the end observes zero
pub static SONG_TEXT_PAGE_VERSES: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new("song_text_page_verses", "Verses returned per song text page")
            .namespace(NAMESPACE)
            .buckets(vec![0.0, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0]),
    )
    .expect("Failed to create SONG_TEXT_PAGE_VERSES metric")
});

pub static DB_QUERY_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new("db_query_duration_seconds", "Song query latency in seconds")
            .namespace(NAMESPACE)
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]),
        &["query"],
    )
    .expect("Failed to create DB_QUERY_DURATION_SECONDS metric")
});

pub static DB_POOL_CONNECTIONS: Lazy<GaugeVec> = Lazy::new(|| {
    GaugeVec::new(
        Opts::new("db_pool_connections", "Database connection pool statistics").namespace(NAMESPACE),
        &["state"], // "idle", "active", "max"
    )
    .expect("Failed to create DB_POOL_CONNECTIONS metric")
});

fn register_metrics(registry: &Registry) {
    let collectors: [(&str, Box<dyn prometheus::core::Collector>); 6] = [
        ("HTTP_REQUESTS_TOTAL", Box::new(HTTP_REQUESTS_TOTAL.clone())),
        ("HTTP_REQUEST_DURATION_SECONDS", Box::new(HTTP_REQUEST_DURATION_SECONDS.clone())),
        ("SONG_OPERATIONS_TOTAL", Box::new(SONG_OPERATIONS_TOTAL.clone())),
        ("SONG_TEXT_PAGE_VERSES", Box::new(SONG_TEXT_PAGE_VERSES.clone())),
        ("DB_QUERY_DURATION_SECONDS", Box::new(DB_QUERY_DURATION_SECONDS.clone())),
        ("DB_POOL_CONNECTIONS", Box::new(DB_POOL_CONNECTIONS.clone())),
    ];
    for (name, collector) in collectors {
        registry
            .register(collector)
            .unwrap_or_else(|e| panic!("Failed to register {name}: {e}"));
    }
}

/// Song library operations, one per endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongOperation {
    Add,
    List,
    Text,
    Update,
    Delete,
}

impl SongOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            SongOperation::Add => "add",
            SongOperation::List => "list",
            SongOperation::Text => "text",
            SongOperation::Update => "update",
            SongOperation::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    NotFound,
    Failed,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::NotFound => "not_found",
            Outcome::Failed => "failed",
        }
    }
}

/// Statements issued against the `songs` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongQuery {
    Insert,
    List,
    Exists,
    Text,
    Update,
    Delete,
}

impl SongQuery {
    pub fn as_str(self) -> &'static str {
        match self {
            SongQuery::Insert => "insert_song",
            SongQuery::List => "list_songs",
            SongQuery::Exists => "song_exists",
            SongQuery::Text => "song_text",
            SongQuery::Update => "update_song",
            SongQuery::Delete => "delete_song",
        }
    }
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

pub fn record_http_request(method: &str, route: &str, status: u16, duration_secs: f64) {
    let status = status.to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, route, status.as_str()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, route])
        .observe(duration_secs);
}

pub fn record_song_operation(operation: SongOperation, outcome: Outcome) {
    SONG_OPERATIONS_TOTAL
        .with_label_values(&[operation.as_str(), outcome.as_str()])
        .inc();
}

pub fn record_text_page(verses: usize) {
    SONG_TEXT_PAGE_VERSES.observe(verses as f64);
}

/// Observe the time elapsed since `started` for `query`
pub fn record_song_query(query: SongQuery, started: Instant) {
    DB_QUERY_DURATION_SECONDS
        .with_label_values(&[query.as_str()])
        .observe(started.elapsed().as_secs_f64());
}

pub fn update_db_pool_stats(idle: u32, active: u32, max: u32) {
    for (state, value) in [("idle", idle), ("active", active), ("max", max)] {
        DB_POOL_CONNECTIONS
            .with_label_values(&[state])
            .set(value as f64);
    }
}
