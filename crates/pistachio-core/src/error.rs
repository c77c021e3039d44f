//! Error types for the sketch model

use thiserror::Error;

use crate::ids::{EntityId, EntityKind};

/// Error type for entity store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error("Duplicate entity id: {0}")]
    DuplicateId(EntityId),

    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: u32,
        len: usize,
    },
}

/// Result type for sketch model operations
pub type SketchResult<T> = Result<T, SketchError>;
