// src/core/error.rs

use thiserror::Error;

/// Failure taxonomy for the fetch pipeline.
///
/// `Http`, `Net` and `EmptyBody` are transient as far as the retry
/// controller is concerned. A malformed payload is not distinguished from
/// a transient failure; it exhausts retries like any other (see DESIGN.md).
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: status {status} for {url}")]
    Http { status: u16, url: String },

    #[error("network error: {0}")]
    Net(#[from] reqwest::Error),

    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{label}: gave up after {attempts} attempts")]
    RetriesExhausted { label: String, attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
