//! Identifiers and entity references
//!
//! All ids are opaque 64-bit values assigned by the caller. Only [`EntityId`]
//! uniqueness is enforced, and only within a single [`EntityStore`].
//!
//! [`EntityStore`]: crate::store::EntityStore

use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an id from its raw value
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw value
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a document
    DocumentId
);
define_id!(
    /// Identifier of a sketch within a document
    SketchId
);
define_id!(
    /// Identifier of an entity, unique within its store
    EntityId
);
define_id!(
    /// Identifier of a constraint
    ConstraintId
);

/// The six entity kinds, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    Point,
    Line,
    Circle,
    Arc,
    Ellipse,
    Curve,
}

impl EntityKind {
    /// All kinds in storage (and serialization) order
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Point,
        EntityKind::Line,
        EntityKind::Circle,
        EntityKind::Arc,
        EntityKind::Ellipse,
        EntityKind::Curve,
    ];

    /// Tag used for this kind on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Point => "Point",
            EntityKind::Line => "Line",
            EntityKind::Circle => "Circle",
            EntityKind::Arc => "Arc",
            EntityKind::Ellipse => "Ellipse",
            EntityKind::Curve => "Curve",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained location on an entity, used as a constraint target
///
/// Discriminants are the wire values and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EntityAnchor {
    #[default]
    None = 0,

    // Point
    Point = 1,

    // Line
    LineStart = 2,
    LineEnd = 3,
    LineMid = 4,
    LineInfinite = 5,

    // Circle / Arc / Ellipse
    Center = 6,
    RadiusPoint = 7,
    Start = 8,
    End = 9,

    // Curve
    CurvePoint0 = 10,
    CurvePoint1 = 11,
    CurveTangent0 = 12,
    CurveTangent1 = 13,

    AnyPoint = 14,
}

impl EntityAnchor {
    const ALL: [EntityAnchor; 15] = [
        EntityAnchor::None,
        EntityAnchor::Point,
        EntityAnchor::LineStart,
        EntityAnchor::LineEnd,
        EntityAnchor::LineMid,
        EntityAnchor::LineInfinite,
        EntityAnchor::Center,
        EntityAnchor::RadiusPoint,
        EntityAnchor::Start,
        EntityAnchor::End,
        EntityAnchor::CurvePoint0,
        EntityAnchor::CurvePoint1,
        EntityAnchor::CurveTangent0,
        EntityAnchor::CurveTangent1,
        EntityAnchor::AnyPoint,
    ];

    /// Wire value of this anchor
    pub fn to_raw(self) -> u8 {
        self as u8
    }

    /// Anchor for a wire value, if it names one
    pub fn from_raw(raw: i64) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// A reference from a constraint to a feature of an entity
///
/// The anchor is not checked against the referenced entity's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityRef {
    pub id: EntityId,
    pub anchor: EntityAnchor,
}

impl EntityRef {
    /// Create a new entity reference
    pub fn new(id: impl Into<EntityId>, anchor: EntityAnchor) -> Self {
        Self {
            id: id.into(),
            anchor,
        }
    }

    /// Reference an entity as a whole
    pub fn whole(id: impl Into<EntityId>) -> Self {
        Self::new(id, EntityAnchor::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_raw_values_are_stable() {
        assert_eq!(EntityAnchor::None.to_raw(), 0);
        assert_eq!(EntityAnchor::LineStart.to_raw(), 2);
        assert_eq!(EntityAnchor::AnyPoint.to_raw(), 14);

        for anchor in EntityAnchor::ALL {
            assert_eq!(EntityAnchor::from_raw(anchor.to_raw() as i64), Some(anchor));
        }
    }

    #[test]
    fn test_anchor_out_of_range() {
        assert_eq!(EntityAnchor::from_raw(15), None);
        assert_eq!(EntityAnchor::from_raw(-1), None);
    }

    #[test]
    fn test_kind_tags() {
        let tags: Vec<_> = EntityKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(tags, ["Point", "Line", "Circle", "Arc", "Ellipse", "Curve"]);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(EntityId::new(42).to_string(), "42");
        assert_eq!(u64::from(SketchId::from(7)), 7);
    }
}
