//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid model timeout")]
    InvalidModelTimeout,

    #[error("Rate limit window must be at least 1 second")]
    InvalidRateLimitWindow,

    #[error("Rate limit max_requests must be at least 1")]
    InvalidRateLimitMax,

    #[error("Firestore requires both project_id and api_key")]
    IncompleteFirestoreConfig,
}
