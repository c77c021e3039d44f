//! Sketch Geometric Entities
//!
//! Defines the six 2D entity kinds stored in an [`EntityStore`]. Every kind
//! carries the same [`EntityHeader`].
//!
//! [`EntityStore`]: crate::store::EntityStore

use glam::DVec2;

use crate::ids::{EntityId, EntityKind};

/// Fields shared by every entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct EntityHeader {
    /// Unique identifier within the owning store
    pub id: EntityId,
    /// Display name (may be empty)
    pub name: String,
    /// Reference/helper geometry, not part of the final profile
    pub construction: bool,
    /// Whether the entity is drawn
    pub visible: bool,
    /// Whether the entity can be picked
    pub selectable: bool,
}

impl Default for EntityHeader {
    fn default() -> Self {
        Self {
            id: EntityId::default(),
            name: String::new(),
            construction: false,
            visible: true,
            selectable: true,
        }
    }
}

impl EntityHeader {
    /// Create a header with default flags
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Access to the header of any entity kind
pub trait SketchEntity {
    /// Kind tag of this entity type
    const KIND: EntityKind;

    /// Shared header
    fn header(&self) -> &EntityHeader;

    /// Shared header (mutable)
    fn header_mut(&mut self) -> &mut EntityHeader;

    /// Entity id
    fn id(&self) -> EntityId {
        self.header().id
    }

    /// Set the display name
    fn with_name(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.header_mut().name = name.into();
        self
    }

    /// Mark as construction geometry
    fn as_construction(mut self) -> Self
    where
        Self: Sized,
    {
        self.header_mut().construction = true;
        self
    }

    /// Hide the entity
    fn hidden(mut self) -> Self
    where
        Self: Sized,
    {
        self.header_mut().visible = false;
        self
    }
}

macro_rules! impl_sketch_entity {
    ($ty:ty, $kind:expr) => {
        impl SketchEntity for $ty {
            const KIND: EntityKind = $kind;

            fn header(&self) -> &EntityHeader {
                &self.h
            }

            fn header_mut(&mut self) -> &mut EntityHeader {
                &mut self.h
            }
        }
    };
}

/// A point in 2D space
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point2D {
    pub h: EntityHeader,
    /// Position in sketch coordinates
    pub p: DVec2,
}

impl Point2D {
    /// Create a new point
    pub fn new(id: impl Into<EntityId>, p: DVec2) -> Self {
        Self {
            h: EntityHeader::new(id),
            p,
        }
    }
}

/// A line segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line2D {
    pub h: EntityHeader,
    /// Start point
    pub a: DVec2,
    /// End point
    pub b: DVec2,
}

impl Line2D {
    /// Create a new line segment
    pub fn new(id: impl Into<EntityId>, a: DVec2, b: DVec2) -> Self {
        Self {
            h: EntityHeader::new(id),
            a,
            b,
        }
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }
}

/// A full circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle2D {
    pub h: EntityHeader,
    pub center: DVec2,
    pub radius: f64,
}

impl Default for Circle2D {
    fn default() -> Self {
        Self {
            h: EntityHeader::default(),
            center: DVec2::ZERO,
            radius: 1.0,
        }
    }
}

impl Circle2D {
    /// Create a new circle
    pub fn new(id: impl Into<EntityId>, center: DVec2, radius: f64) -> Self {
        Self {
            h: EntityHeader::new(id),
            center,
            radius,
        }
    }
}

/// A circular arc
#[derive(Debug, Clone, PartialEq)]
pub struct Arc2D {
    pub h: EntityHeader,
    pub center: DVec2,
    pub radius: f64,
    /// Start point on the arc
    pub start: DVec2,
    /// End point on the arc
    pub end: DVec2,
    /// Sweep direction from start to end
    pub ccw: bool,
}

impl Default for Arc2D {
    fn default() -> Self {
        Self {
            h: EntityHeader::default(),
            center: DVec2::ZERO,
            radius: 1.0,
            start: DVec2::ZERO,
            end: DVec2::ZERO,
            ccw: true,
        }
    }
}

impl Arc2D {
    /// Create a new counter-clockwise arc
    pub fn new(
        id: impl Into<EntityId>,
        center: DVec2,
        radius: f64,
        start: DVec2,
        end: DVec2,
    ) -> Self {
        Self {
            h: EntityHeader::new(id),
            center,
            radius,
            start,
            end,
            ccw: true,
        }
    }

    /// Set the sweep direction
    pub fn with_ccw(mut self, ccw: bool) -> Self {
        self.ccw = ccw;
        self
    }
}

/// An ellipse
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse2D {
    pub h: EntityHeader,
    pub center: DVec2,
    /// Radius along the major axis
    pub rx: f64,
    /// Radius along the minor axis
    pub ry: f64,
    /// Rotation of the major axis (radians)
    pub rotation: f64,
}

impl Default for Ellipse2D {
    fn default() -> Self {
        Self {
            h: EntityHeader::default(),
            center: DVec2::ZERO,
            rx: 2.0,
            ry: 1.0,
            rotation: 0.0,
        }
    }
}

impl Ellipse2D {
    /// Create a new axis-aligned ellipse
    pub fn new(id: impl Into<EntityId>, center: DVec2, rx: f64, ry: f64) -> Self {
        Self {
            h: EntityHeader::new(id),
            center,
            rx,
            ry,
            rotation: 0.0,
        }
    }

    /// Set the major axis rotation (radians)
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A curve through ordered control points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve2D {
    pub h: EntityHeader,
    pub control_points: Vec<DVec2>,
    /// Whether the last point connects back to the first
    pub closed: bool,
}

impl Curve2D {
    /// Create a new open curve
    pub fn new(id: impl Into<EntityId>, control_points: Vec<DVec2>) -> Self {
        Self {
            h: EntityHeader::new(id),
            control_points,
            closed: false,
        }
    }

    /// Set whether the curve is closed
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }
}

impl_sketch_entity!(Point2D, EntityKind::Point);
impl_sketch_entity!(Line2D, EntityKind::Line);
impl_sketch_entity!(Circle2D, EntityKind::Circle);
impl_sketch_entity!(Arc2D, EntityKind::Arc);
impl_sketch_entity!(Ellipse2D, EntityKind::Ellipse);
impl_sketch_entity!(Curve2D, EntityKind::Curve);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults() {
        let h = EntityHeader::new(5);
        assert_eq!(h.id, EntityId(5));
        assert!(h.name.is_empty());
        assert!(!h.construction);
        assert!(h.visible);
        assert!(h.selectable);
    }

    #[test]
    fn test_builder_flags() {
        let line = Line2D::new(1, DVec2::ZERO, DVec2::new(3.0, 4.0))
            .with_name("edge")
            .as_construction()
            .hidden();

        assert_eq!(line.h.name, "edge");
        assert!(line.h.construction);
        assert!(!line.h.visible);
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn test_kind_defaults() {
        assert_eq!(Circle2D::default().radius, 1.0);
        assert!(Arc2D::default().ccw);
        let e = Ellipse2D::default();
        assert_eq!((e.rx, e.ry, e.rotation), (2.0, 1.0, 0.0));
        assert!(!Curve2D::default().closed);
    }
}
