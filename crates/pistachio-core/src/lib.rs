//! Pistachio Sketch Document Model
//!
//! This crate provides:
//! - Caller-assigned identifiers for documents, sketches, entities and constraints
//! - Columnar entity storage with O(1) id lookup ([`EntityStore`])
//! - Geometric and dimensional constraints referencing entity anchors
//! - [`Sketch`] and [`Document`] aggregates
//!
//! Constraints are carried as data only. Nothing here solves them or checks
//! that a referenced entity exists.

pub mod constraint;
pub mod entity;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;

// Re-exports for convenience
pub use constraint::{
    Constraint, ConstraintKind, ConstraintMeta, DimensionalConstraint, DimensionalConstraintType,
    GeometricConstraint, GeometricConstraintType,
};
pub use entity::{
    Arc2D, Circle2D, Curve2D, Ellipse2D, EntityHeader, Line2D, Point2D, SketchEntity,
};
pub use error::{SketchError, SketchResult};
pub use ids::{ConstraintId, DocumentId, EntityAnchor, EntityId, EntityKind, EntityRef, SketchId};
pub use model::{Document, Sketch};
pub use store::{EntityHandle, EntityStore, EntityView};

/// 2D sketch-plane coordinate (double precision)
pub use glam::DVec2;
