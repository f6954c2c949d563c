// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Search for \"{term}\" returned 0 results")]
    EmptyResult { term: String },

    #[error("Pagination stalled at {collected} of {total} items: no further pages")]
    PaginationStalled { collected: usize, total: usize },

    #[error("Pagination stopped after {limit} pages with {collected} of {total} items")]
    PageLimitExceeded {
        limit: usize,
        collected: usize,
        total: usize,
    },

    #[error("Unrecognized file size \"{0}\"")]
    MalformedSize(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write report {path}: {source}")]
    Report { path: PathBuf, source: csv::Error },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl PipelineError {
    pub fn network(url: &str, err: reqwest::Error) -> Self {
        PipelineError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
