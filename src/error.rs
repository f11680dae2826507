//! Error types for Open Graph validation, rendering and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Caller misuse of an [`OpenGraphItem`](crate::OpenGraphItem).
///
/// Validation findings are never reported through this type; they are data in
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OgError {
    #[error("support for Facebook extensions is not built yet")]
    FacebookUnsupported,

    #[error("validate against either schema1 or schema2, not both")]
    ConflictingSchemas,

    #[error("no schema selected: enable schema1 or schema2")]
    NoSchemaSelected,

    #[error("you must call `validate()` first")]
    NotValidated,
}

impl OgError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while loading a property bag from JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("property document must be a JSON object, got {actual}")]
    NotAnObject { actual: String },

    #[error("invalid value for {property}: {reason}")]
    InvalidValue { property: String, reason: String },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            _ => 2,
        }
    }
}
