//! Error types for the tracker.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors from storage backends and the task service.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// No task exists with the given id.
    #[error("Task not found: {id}")]
    TaskNotFound { id: u64 },

    /// The highest task id is already `u64::MAX`.
    #[error("Task id space exhausted")]
    IdExhausted,

    /// Failed to read the tasks file.
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// Failed to write the tasks file.
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: String, reason: String },

    /// HTTP request to the remote bin failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote bin returned an error response.
    #[error("Bin API error: {status} - {message}")]
    BinApi { status: u16, message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
