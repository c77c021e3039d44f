//! Sketch Constraints
//!
//! Defines geometric and dimensional constraints that can be applied
//! to sketch entities. Constraints are plain data: they reference entity
//! anchors through [`EntityRef`] and are never checked against the store.

use crate::ids::{ConstraintId, EntityId, EntityRef};

/// Kind of geometric relation
///
/// Ordinals are the wire values and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum GeometricConstraintType {
    #[default]
    Horizontal = 0,
    Vertical = 1,
    Coincident = 2,
    Tangent = 3,
    Perpendicular = 4,
    Parallel = 5,
    Collinear = 6,
    Midpoint = 7,
    Concentric = 8,
    Symmetry = 9,
    Fix = 10,
    Curvature = 11,
}

impl GeometricConstraintType {
    const ALL: [GeometricConstraintType; 12] = [
        GeometricConstraintType::Horizontal,
        GeometricConstraintType::Vertical,
        GeometricConstraintType::Coincident,
        GeometricConstraintType::Tangent,
        GeometricConstraintType::Perpendicular,
        GeometricConstraintType::Parallel,
        GeometricConstraintType::Collinear,
        GeometricConstraintType::Midpoint,
        GeometricConstraintType::Concentric,
        GeometricConstraintType::Symmetry,
        GeometricConstraintType::Fix,
        GeometricConstraintType::Curvature,
    ];

    /// Wire value of this type
    pub fn to_raw(self) -> u8 {
        self as u8
    }

    /// Type for a wire value, if it names one
    pub fn from_raw(raw: i64) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Get the display name of this type
    pub fn name(&self) -> &'static str {
        match self {
            GeometricConstraintType::Horizontal => "Horizontal",
            GeometricConstraintType::Vertical => "Vertical",
            GeometricConstraintType::Coincident => "Coincident",
            GeometricConstraintType::Tangent => "Tangent",
            GeometricConstraintType::Perpendicular => "Perpendicular",
            GeometricConstraintType::Parallel => "Parallel",
            GeometricConstraintType::Collinear => "Collinear",
            GeometricConstraintType::Midpoint => "Midpoint",
            GeometricConstraintType::Concentric => "Concentric",
            GeometricConstraintType::Symmetry => "Symmetry",
            GeometricConstraintType::Fix => "Fix",
            GeometricConstraintType::Curvature => "Curvature",
        }
    }
}

/// Kind of dimension
///
/// Ordinals are the wire values and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DimensionalConstraintType {
    #[default]
    Distance = 0,
    Length = 1,
    Angle = 2,
    Radius = 3,
    Diameter = 4,
}

impl DimensionalConstraintType {
    const ALL: [DimensionalConstraintType; 5] = [
        DimensionalConstraintType::Distance,
        DimensionalConstraintType::Length,
        DimensionalConstraintType::Angle,
        DimensionalConstraintType::Radius,
        DimensionalConstraintType::Diameter,
    ];

    /// Wire value of this type
    pub fn to_raw(self) -> u8 {
        self as u8
    }

    /// Type for a wire value, if it names one
    pub fn from_raw(raw: i64) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Get the display name of this type
    pub fn name(&self) -> &'static str {
        match self {
            DimensionalConstraintType::Distance => "Distance",
            DimensionalConstraintType::Length => "Length",
            DimensionalConstraintType::Angle => "Angle",
            DimensionalConstraintType::Radius => "Radius",
            DimensionalConstraintType::Diameter => "Diameter",
        }
    }
}

/// Fields shared by every constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMeta {
    pub id: ConstraintId,
    pub name: String,
    pub enabled: bool,
    pub suppressed: bool,
}

impl Default for ConstraintMeta {
    fn default() -> Self {
        Self {
            id: ConstraintId::default(),
            name: String::new(),
            enabled: true,
            suppressed: false,
        }
    }
}

impl ConstraintMeta {
    /// Create enabled, unsuppressed metadata
    pub fn new(id: impl Into<ConstraintId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A geometric relation between entity features
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometricConstraint {
    pub meta: ConstraintMeta,
    pub kind: GeometricConstraintType,
    pub refs: Vec<EntityRef>,
    /// Optional numeric parameter
    pub param: Option<f64>,
}

impl GeometricConstraint {
    /// Create a geometric constraint without a parameter
    pub fn new(
        id: impl Into<ConstraintId>,
        kind: GeometricConstraintType,
        refs: Vec<EntityRef>,
    ) -> Self {
        Self {
            meta: ConstraintMeta::new(id),
            kind,
            refs,
            param: None,
        }
    }

    /// Set the numeric parameter
    pub fn with_param(mut self, param: f64) -> Self {
        self.param = Some(param);
        self
    }
}

/// A dimension on entity features
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionalConstraint {
    pub meta: ConstraintMeta,
    pub kind: DimensionalConstraintType,
    pub refs: Vec<EntityRef>,
    pub value: f64,
    /// `true` when the value is authoritative, `false` when it is a derived readout
    pub driving: bool,
    pub units: String,
}

impl Default for DimensionalConstraint {
    fn default() -> Self {
        Self {
            meta: ConstraintMeta::default(),
            kind: DimensionalConstraintType::default(),
            refs: Vec::new(),
            value: 0.0,
            driving: true,
            units: DimensionalConstraint::DEFAULT_UNITS.to_string(),
        }
    }
}

impl DimensionalConstraint {
    /// Units assumed when none are given
    pub const DEFAULT_UNITS: &'static str = "mm";

    /// Create a driving dimension in millimetres
    pub fn new(
        id: impl Into<ConstraintId>,
        kind: DimensionalConstraintType,
        refs: Vec<EntityRef>,
        value: f64,
    ) -> Self {
        Self {
            meta: ConstraintMeta::new(id),
            kind,
            refs,
            value,
            ..Self::default()
        }
    }

    /// Mark as a driven (read-only) dimension
    pub fn driven(mut self) -> Self {
        self.driving = false;
        self
    }

    /// Set the units string
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }
}

/// Tag of the constraint union
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Geometric,
    Dimensional,
}

impl ConstraintKind {
    /// Tag used for this kind on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Geometric => "Geometric",
            ConstraintKind::Dimensional => "Dimensional",
        }
    }
}

/// A constraint between sketch entities
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Geometric(GeometricConstraint),
    Dimensional(DimensionalConstraint),
}

impl Constraint {
    /// Get the union tag
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Geometric(_) => ConstraintKind::Geometric,
            Constraint::Dimensional(_) => ConstraintKind::Dimensional,
        }
    }

    /// Get the shared metadata
    pub fn meta(&self) -> &ConstraintMeta {
        match self {
            Constraint::Geometric(c) => &c.meta,
            Constraint::Dimensional(c) => &c.meta,
        }
    }

    /// Get the constraint id
    pub fn id(&self) -> ConstraintId {
        self.meta().id
    }

    /// Get the entity references, in order
    pub fn refs(&self) -> &[EntityRef] {
        match self {
            Constraint::Geometric(c) => &c.refs,
            Constraint::Dimensional(c) => &c.refs,
        }
    }

    /// Check if this constraint references a specific entity
    pub fn references_entity(&self, id: EntityId) -> bool {
        self.refs().iter().any(|r| r.id == id)
    }

    /// Get the type name of this constraint
    pub fn type_name(&self) -> &'static str {
        match self {
            Constraint::Geometric(c) => c.kind.name(),
            Constraint::Dimensional(c) => c.kind.name(),
        }
    }
}

impl From<GeometricConstraint> for Constraint {
    fn from(c: GeometricConstraint) -> Self {
        Constraint::Geometric(c)
    }
}

impl From<DimensionalConstraint> for Constraint {
    fn from(c: DimensionalConstraint) -> Self {
        Constraint::Dimensional(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EntityAnchor;

    #[test]
    fn test_references() {
        let c: Constraint = GeometricConstraint::new(
            1,
            GeometricConstraintType::Coincident,
            vec![
                EntityRef::new(10, EntityAnchor::LineEnd),
                EntityRef::new(11, EntityAnchor::LineStart),
            ],
        )
        .into();

        assert_eq!(c.kind(), ConstraintKind::Geometric);
        assert!(c.references_entity(EntityId(10)));
        assert!(c.references_entity(EntityId(11)));
        assert!(!c.references_entity(EntityId(12)));
        assert_eq!(c.type_name(), "Coincident");
    }

    #[test]
    fn test_dimensional_defaults() {
        let c = DimensionalConstraint::new(
            2,
            DimensionalConstraintType::Radius,
            vec![EntityRef::whole(5)],
            12.5,
        );
        assert!(c.driving);
        assert_eq!(c.units, "mm");
        assert!(c.meta.enabled);
        assert!(!c.meta.suppressed);

        let c = c.driven().with_units("in");
        assert!(!c.driving);
        assert_eq!(c.units, "in");
    }

    #[test]
    fn test_type_raw_values() {
        assert_eq!(GeometricConstraintType::Curvature.to_raw(), 11);
        assert_eq!(
            GeometricConstraintType::from_raw(6),
            Some(GeometricConstraintType::Collinear)
        );
        assert_eq!(GeometricConstraintType::from_raw(12), None);
        assert_eq!(
            DimensionalConstraintType::from_raw(4),
            Some(DimensionalConstraintType::Diameter)
        );
        assert_eq!(DimensionalConstraintType::from_raw(5), None);
    }
}
