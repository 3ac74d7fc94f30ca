//! Error types for job estimation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the estimator.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid job file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Job contains no products")]
    EmptyJob,

    #[error("Job validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
