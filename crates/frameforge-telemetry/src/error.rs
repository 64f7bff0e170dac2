//! Error types for telemetry persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Reading or writing a session log file failed.
    #[error("Session log I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
