//! Sketch and Document aggregates

use crate::constraint::Constraint;
use crate::ids::{DocumentId, EntityId, SketchId};
use crate::store::EntityStore;

/// A named sketch: one entity store plus an ordered constraint list
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    pub id: SketchId,
    pub name: String,
    pub visible: bool,
    pub entities: EntityStore,
    pub constraints: Vec<Constraint>,
}

impl Default for Sketch {
    fn default() -> Self {
        Self {
            id: SketchId::default(),
            name: String::new(),
            visible: true,
            entities: EntityStore::new(),
            constraints: Vec::new(),
        }
    }
}

impl Sketch {
    /// Create a new empty, visible sketch
    pub fn new(id: impl Into<SketchId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a constraint
    pub fn add_constraint(&mut self, constraint: impl Into<Constraint>) {
        self.constraints.push(constraint.into());
    }

    /// Constraints that reference the given entity, in list order
    pub fn constraints_referencing(&self, id: EntityId) -> impl Iterator<Item = &Constraint> {
        self.constraints
            .iter()
            .filter(move |c| c.references_entity(id))
    }
}

/// A document: an ordered list of sketches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub sketches: Vec<Sketch>,
}

impl Document {
    /// Create a new empty document
    pub fn new(id: impl Into<DocumentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sketches: Vec::new(),
        }
    }

    /// Get a sketch by id
    pub fn sketch(&self, id: SketchId) -> Option<&Sketch> {
        self.sketches.iter().find(|s| s.id == id)
    }

    /// Get a sketch by id (mutable)
    pub fn sketch_mut(&mut self, id: SketchId) -> Option<&mut Sketch> {
        self.sketches.iter_mut().find(|s| s.id == id)
    }

    /// Total number of entities across all sketches
    pub fn entity_count(&self) -> usize {
        self.sketches.iter().map(|s| s.entities.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{GeometricConstraint, GeometricConstraintType};
    use crate::entity::Line2D;
    use crate::ids::{EntityAnchor, EntityRef};
    use glam::DVec2;

    #[test]
    fn test_constraints_referencing() {
        let mut sketch = Sketch::new(10, "Base");
        sketch
            .entities
            .add_line(Line2D::new(100, DVec2::ZERO, DVec2::X))
            .unwrap();
        sketch.add_constraint(GeometricConstraint::new(
            1,
            GeometricConstraintType::Horizontal,
            vec![EntityRef::new(100, EntityAnchor::LineStart)],
        ));
        sketch.add_constraint(GeometricConstraint::new(
            2,
            GeometricConstraintType::Fix,
            vec![EntityRef::whole(200)],
        ));

        let ids: Vec<_> = sketch
            .constraints_referencing(EntityId(100))
            .map(|c| c.id().raw())
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_document_lookup() {
        let mut doc = Document::new(1, "Doc");
        doc.sketches.push(Sketch::new(10, "A"));
        doc.sketches.push(Sketch::new(11, "B"));

        assert_eq!(doc.sketch(SketchId(11)).map(|s| s.name.as_str()), Some("B"));
        assert!(doc.sketch(SketchId(12)).is_none());

        doc.sketch_mut(SketchId(10)).unwrap().visible = false;
        assert!(!doc.sketches[0].visible);
        assert_eq!(doc.entity_count(), 0);
    }
}
