//! Error types for the FlatQL core library
//!
//! This module defines the error handling system for FlatQL, using thiserror
//! for ergonomic error definitions and anyhow for flexible error contexts.
//!
//! Absence of data is never an error: lookups that find nothing return
//! `None`, a caller supplied default, or an empty result set.

use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for FlatQL operations
#[derive(Error, Debug)]
pub enum Error {
    /// Wildcards used where a single concrete location is required
    #[error("Unsupported pattern: wildcard `*` is not allowed in `{path}`")]
    UnsupportedPattern { path: String },

    /// Path that cannot be used in the calling context
    #[error("Invalid path `{path}`: {message}")]
    InvalidPath { message: String, path: String },

    /// Index segment whose position is not an integer
    #[error("Invalid index segment `{segment}` in `{path}`")]
    InvalidIndex {
        segment: String,
        path: String,
        #[source]
        source: Option<ParseIntError>,
    },

    /// Destination path that runs through an already written non-mapping value
    #[error("Path conflict at `{path}`: `{segment}` already holds a non-mapping value")]
    PathConflict { path: String, segment: String },

    /// Failure reported by a user supplied mapping function
    #[error("Mapping failed for `{source_path}`: {message}")]
    Mapping {
        source_path: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Rule configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported pattern error for a path containing wildcards
    pub fn unsupported_pattern(path: impl Into<String>) -> Self {
        Self::UnsupportedPattern { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create an invalid index error without an underlying parse failure
    pub fn invalid_index(segment: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidIndex {
            segment: segment.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a mapping error, the usual way for a mapping function to fail
    pub fn mapping(source_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mapping {
            source_path: source_path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
