//! Error types for the library surface

use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching the remote app collection
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("remote collection endpoint is not configured")]
    NotConfigured,

    #[error("request to remote collection failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote collection answered with HTTP {0}")]
    Status(u16),

    #[error("malformed collection payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch task ended unexpectedly: {0}")]
    Task(String),
}

/// Failure while loading or saving learned answers
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a cache directory")]
    NoCacheDir,

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("knowledge file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
