//! Entity Store
//!
//! Columnar storage for sketch entities: each kind lives in its own dense
//! vector, and an `EntityId -> EntityHandle` map gives O(1) access by id.
//!
//! Entities cannot be removed individually, only cleared in bulk, so ids are
//! permanent and dense indices are never recycled. A generational handle
//! would be needed before single-entity removal could be supported.

use std::collections::HashMap;

use crate::entity::{
    Arc2D, Circle2D, Curve2D, Ellipse2D, EntityHeader, Line2D, Point2D, SketchEntity,
};
use crate::error::{SketchError, SketchResult};
use crate::ids::{EntityId, EntityKind};

/// Kind tag plus dense index within that kind's array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityHandle {
    pub kind: EntityKind,
    pub index: u32,
}

impl EntityHandle {
    /// Create a new handle
    pub fn new(kind: EntityKind, index: u32) -> Self {
        Self { kind, index }
    }
}

/// Borrowed view of a stored entity of any kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityView<'a> {
    Point(&'a Point2D),
    Line(&'a Line2D),
    Circle(&'a Circle2D),
    Arc(&'a Arc2D),
    Ellipse(&'a Ellipse2D),
    Curve(&'a Curve2D),
}

impl<'a> EntityView<'a> {
    /// Kind of the viewed entity
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityView::Point(_) => EntityKind::Point,
            EntityView::Line(_) => EntityKind::Line,
            EntityView::Circle(_) => EntityKind::Circle,
            EntityView::Arc(_) => EntityKind::Arc,
            EntityView::Ellipse(_) => EntityKind::Ellipse,
            EntityView::Curve(_) => EntityKind::Curve,
        }
    }

    /// Shared header of the viewed entity
    pub fn header(&self) -> &'a EntityHeader {
        match self {
            EntityView::Point(e) => &e.h,
            EntityView::Line(e) => &e.h,
            EntityView::Circle(e) => &e.h,
            EntityView::Arc(e) => &e.h,
            EntityView::Ellipse(e) => &e.h,
            EntityView::Curve(e) => &e.h,
        }
    }
}

/// Typed columnar storage for the six entity kinds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    points: Vec<Point2D>,
    lines: Vec<Line2D>,
    circles: Vec<Circle2D>,
    arcs: Vec<Arc2D>,
    ellipses: Vec<Ellipse2D>,
    curves: Vec<Curve2D>,

    id_to_handle: HashMap<EntityId, EntityHandle>,
}

/// Append `entity` to `items` unless its id is already indexed.
fn insert<T: SketchEntity>(
    id_to_handle: &mut HashMap<EntityId, EntityHandle>,
    items: &mut Vec<T>,
    entity: T,
) -> SketchResult<EntityHandle> {
    let id = entity.id();
    if id_to_handle.contains_key(&id) {
        tracing::warn!("Rejected {} with duplicate id {}", T::KIND, id);
        return Err(SketchError::DuplicateId(id));
    }

    let handle = EntityHandle::new(T::KIND, items.len() as u32);
    items.push(entity);
    id_to_handle.insert(id, handle);
    Ok(handle)
}

fn out_of_range(kind: EntityKind, index: u32, len: usize) -> SketchError {
    SketchError::IndexOutOfRange { kind, index, len }
}

macro_rules! typed_access {
    ($field:ident, $kind:expr, $ty:ty, $add:ident, $get:ident, $get_mut:ident) => {
        #[doc = concat!("Insert a `", stringify!($ty), "`, failing with `DuplicateId` if its id is taken")]
        pub fn $add(&mut self, entity: $ty) -> SketchResult<EntityHandle> {
            insert(&mut self.id_to_handle, &mut self.$field, entity)
        }

        #[doc = concat!("Get a `", stringify!($ty), "` by dense index")]
        pub fn $get(&self, index: u32) -> SketchResult<&$ty> {
            self.$field
                .get(index as usize)
                .ok_or_else(|| out_of_range($kind, index, self.$field.len()))
        }

        #[doc = concat!("Get a `", stringify!($ty), "` by dense index (mutable)")]
        pub fn $get_mut(&mut self, index: u32) -> SketchResult<&mut $ty> {
            let len = self.$field.len();
            self.$field
                .get_mut(index as usize)
                .ok_or_else(|| out_of_range($kind, index, len))
        }

        #[doc = concat!("All `", stringify!($ty), "` entities in insertion order")]
        pub fn $field(&self) -> &[$ty] {
            &self.$field
        }
    };
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    typed_access!(points, EntityKind::Point, Point2D, add_point, point, point_mut);
    typed_access!(lines, EntityKind::Line, Line2D, add_line, line, line_mut);
    typed_access!(circles, EntityKind::Circle, Circle2D, add_circle, circle, circle_mut);
    typed_access!(arcs, EntityKind::Arc, Arc2D, add_arc, arc, arc_mut);
    typed_access!(ellipses, EntityKind::Ellipse, Ellipse2D, add_ellipse, ellipse, ellipse_mut);
    typed_access!(curves, EntityKind::Curve, Curve2D, add_curve, curve, curve_mut);

    /// Whether an entity with this id is stored
    pub fn contains(&self, id: EntityId) -> bool {
        self.id_to_handle.contains_key(&id)
    }

    /// Get the handle for an id
    pub fn get_handle(&self, id: EntityId) -> SketchResult<EntityHandle> {
        self.id_to_handle
            .get(&id)
            .copied()
            .ok_or(SketchError::NotFound(id))
    }

    /// Resolve an id to a borrowed view of its entity
    pub fn entity(&self, id: EntityId) -> SketchResult<EntityView<'_>> {
        let handle = self.get_handle(id)?;
        let view = match handle.kind {
            EntityKind::Point => EntityView::Point(self.point(handle.index)?),
            EntityKind::Line => EntityView::Line(self.line(handle.index)?),
            EntityKind::Circle => EntityView::Circle(self.circle(handle.index)?),
            EntityKind::Arc => EntityView::Arc(self.arc(handle.index)?),
            EntityKind::Ellipse => EntityView::Ellipse(self.ellipse(handle.index)?),
            EntityKind::Curve => EntityView::Curve(self.curve(handle.index)?),
        };
        Ok(view)
    }

    /// Number of stored entities of one kind
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Point => self.points.len(),
            EntityKind::Line => self.lines.len(),
            EntityKind::Circle => self.circles.len(),
            EntityKind::Arc => self.arcs.len(),
            EntityKind::Ellipse => self.ellipses.len(),
            EntityKind::Curve => self.curves.len(),
        }
    }

    /// Total number of stored entities
    pub fn len(&self) -> usize {
        self.id_to_handle.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_handle.is_empty()
    }

    /// Remove every entity and the id index
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.circles.clear();
        self.arcs.clear();
        self.ellipses.clear();
        self.curves.clear();
        self.id_to_handle.clear();
    }
}
