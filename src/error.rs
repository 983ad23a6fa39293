//! Custom error types for foreman-backup
//!
//! This module defines the error hierarchy for the exporter using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// The server could not be reached, or the connection failed mid-request
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-success status
    #[error("Foreman API error ({status}) at {url}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// Object lookup by name found nothing
    #[error("{resource_type} not found: {identifier}")]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    /// Object lookup by name matched more than one object
    #[error("{matches} {resource_type} match '{name}'")]
    Ambiguous {
        resource_type: String,
        name: String,
        matches: usize,
    },

    /// Backup tree errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BackupError {
    /// Create a "not found" error for an object of the given resource type
    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for backup operations
pub type BackupResult<T> = Result<T, BackupError>;
