// Error types for the gitfolio data layer.
// Classifies GitHub API failures, cache errors, and README decoding errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no username provided")]
    InvalidInput,

    #[error("user not found")]
    NotFound,

    #[error("API rate limit exceeded, add a GitHub token")]
    RateLimited,

    #[error("GitHub API error: {0}")]
    Upstream(String),

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid README content: {0}")]
    Decode(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
