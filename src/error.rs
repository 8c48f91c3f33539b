// Error types for the sift application.
// Handles research service errors, file loading errors, and general application errors.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("research service error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SiftError>;
