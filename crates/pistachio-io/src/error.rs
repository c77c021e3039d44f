//! Persistence error definitions

use std::path::PathBuf;

use pistachio_core::SketchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field `{field}` in {context}")]
    MissingField {
        context: &'static str,
        field: &'static str,
    },

    #[error("Invalid value for `{field}` in {context}: {reason}")]
    InvalidValue {
        context: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("Unknown {union} kind: {kind}")]
    UnknownKind { union: &'static str, kind: String },

    #[error("Unsupported file version {found} (supported: {expected})")]
    UnsupportedVersion { found: i64, expected: i64 },

    #[error("Invalid sketch data: {0}")]
    Sketch(#[from] SketchError),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
