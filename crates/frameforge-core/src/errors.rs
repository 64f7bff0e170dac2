//! Error types for frameforge.

use thiserror::Error;

/// Top-level error type for document handling at the pipeline boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Malformed document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors while interpreting a user-supplied document URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Not a design file URL: {url}")]
    NotADesignUrl { url: String },

    #[error("Missing or malformed file id in {url}")]
    MissingFileId { url: String },
}

/// Errors reported by a document fetcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Access token was rejected")]
    Unauthorized,

    #[error("Failed to fetch design: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Transport error: {reason}")]
    Transport { reason: String },
}
