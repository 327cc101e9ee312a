//! Error types and error handling for docsift.
//!
//! This module defines the error types used throughout the
//! application. Publish failures are represented here but are
//! swallowed at the sink boundary (see `core::sink::publish`).

use thiserror::Error;

/// Result type alias for docsift operations
pub type Result<T> = std::result::Result<T, DocsiftError>;

/// Main error type for docsift
#[derive(Error, Debug)]
pub enum DocsiftError {
    #[error("Content fetch failed: {0}")]
    ContentFetch(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Invalid front matter in {path}: {message}")]
    FrontMatter { path: String, message: String },

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl DocsiftError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came from reading the content corpus
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            DocsiftError::ContentFetch(_)
                | DocsiftError::CollectionNotFound(_)
                | DocsiftError::FrontMatter { .. }
                | DocsiftError::YamlError(_)
        )
    }

    /// Check if this error came from the index store
    pub fn is_publish_error(&self) -> bool {
        matches!(
            self,
            DocsiftError::Publish(_) | DocsiftError::StorageError(_) | DocsiftError::HttpError(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocsiftError::InvalidQuery(_) | DocsiftError::ConfigError(_)
        )
    }
}
