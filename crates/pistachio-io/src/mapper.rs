//! Document <-> DTO mapping
//!
//! `to_dto` flattens each sketch's typed entity arrays into one list grouped
//! by kind (Point, Line, Circle, Arc, Ellipse, Curve), keeping insertion
//! order within a kind. `from_dto` replays every entity through the store's
//! typed inserts, so id uniqueness is checked again on load.

use pistachio_core::{
    Arc2D, Circle2D, Constraint, ConstraintId, ConstraintMeta, Curve2D, DVec2,
    DimensionalConstraint, Document, DocumentId, Ellipse2D, EntityHeader, EntityId, EntityRef,
    EntityStore, GeometricConstraint, Line2D, Point2D, Sketch, SketchId,
};

use crate::dto::{
    ArcDto, CircleDto, ConstraintDto, ConstraintMetaDto, CurveDto, DimensionalConstraintDto,
    DocumentDto, EllipseDto, EntityDto, EntityHeaderDto, EntityRefDto, FileDto,
    GeometricConstraintDto, LineDto, PointDto, SKETCH_FILE_VERSION, SketchDto, Vec2Dto,
};
use crate::error::{PersistenceError, PersistenceResult};

// ============== Runtime -> DTO ==============

/// Build the file tree for a document
pub fn to_dto(document: &Document) -> FileDto {
    FileDto {
        file_version: SKETCH_FILE_VERSION,
        document: DocumentDto {
            id: document.id.raw(),
            name: document.name.clone(),
            sketches: document.sketches.iter().map(sketch_to_dto).collect(),
        },
    }
}

fn sketch_to_dto(sketch: &Sketch) -> SketchDto {
    SketchDto {
        id: sketch.id.raw(),
        name: sketch.name.clone(),
        visible: sketch.visible,
        entities: entities_to_dto(&sketch.entities),
        constraints: sketch.constraints.iter().map(constraint_to_dto).collect(),
    }
}

fn entities_to_dto(store: &EntityStore) -> Vec<EntityDto> {
    let mut out = Vec::with_capacity(store.len());

    out.extend(store.points().iter().map(|e| {
        EntityDto::Point(PointDto {
            header: header_to_dto(&e.h),
            p: vec2_to_dto(e.p),
        })
    }));
    out.extend(store.lines().iter().map(|e| {
        EntityDto::Line(LineDto {
            header: header_to_dto(&e.h),
            a: vec2_to_dto(e.a),
            b: vec2_to_dto(e.b),
        })
    }));
    out.extend(store.circles().iter().map(|e| {
        EntityDto::Circle(CircleDto {
            header: header_to_dto(&e.h),
            center: vec2_to_dto(e.center),
            radius: e.radius,
        })
    }));
    out.extend(store.arcs().iter().map(|e| {
        EntityDto::Arc(ArcDto {
            header: header_to_dto(&e.h),
            center: vec2_to_dto(e.center),
            radius: e.radius,
            start: vec2_to_dto(e.start),
            end: vec2_to_dto(e.end),
            ccw: e.ccw,
        })
    }));
    out.extend(store.ellipses().iter().map(|e| {
        EntityDto::Ellipse(EllipseDto {
            header: header_to_dto(&e.h),
            center: vec2_to_dto(e.center),
            rx: e.rx,
            ry: e.ry,
            rotation: e.rotation,
        })
    }));
    out.extend(store.curves().iter().map(|e| {
        EntityDto::Curve(CurveDto {
            header: header_to_dto(&e.h),
            control_points: e.control_points.iter().copied().map(vec2_to_dto).collect(),
            closed: e.closed,
        })
    }));

    out
}

fn constraint_to_dto(constraint: &Constraint) -> ConstraintDto {
    match constraint {
        Constraint::Geometric(c) => ConstraintDto::Geometric(GeometricConstraintDto {
            meta: meta_to_dto(&c.meta),
            kind: c.kind,
            refs: c.refs.iter().map(ref_to_dto).collect(),
            param: c.param,
        }),
        Constraint::Dimensional(c) => ConstraintDto::Dimensional(DimensionalConstraintDto {
            meta: meta_to_dto(&c.meta),
            kind: c.kind,
            refs: c.refs.iter().map(ref_to_dto).collect(),
            value: c.value,
            driving: c.driving,
            units: c.units.clone(),
        }),
    }
}

fn header_to_dto(h: &EntityHeader) -> EntityHeaderDto {
    EntityHeaderDto {
        id: h.id.raw(),
        name: h.name.clone(),
        construction: h.construction,
        visible: h.visible,
        selectable: h.selectable,
    }
}

fn meta_to_dto(m: &ConstraintMeta) -> ConstraintMetaDto {
    ConstraintMetaDto {
        id: m.id.raw(),
        name: m.name.clone(),
        enabled: m.enabled,
        suppressed: m.suppressed,
    }
}

fn ref_to_dto(r: &EntityRef) -> EntityRefDto {
    EntityRefDto {
        id: r.id.raw(),
        anchor: r.anchor,
    }
}

fn vec2_to_dto(v: DVec2) -> Vec2Dto {
    Vec2Dto { x: v.x, y: v.y }
}

// ============== DTO -> Runtime ==============

/// Rebuild a document from its file tree
///
/// Fails with `UnsupportedVersion` before anything is built if the file's
/// schema version differs from [`SKETCH_FILE_VERSION`], and with
/// `Sketch(DuplicateId)` if a sketch repeats an entity id.
pub fn from_dto(file: FileDto) -> PersistenceResult<Document> {
    if file.file_version != SKETCH_FILE_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: file.file_version,
            expected: SKETCH_FILE_VERSION,
        });
    }

    let DocumentDto { id, name, sketches } = file.document;
    let mut document = Document::new(DocumentId(id), name);
    document.sketches = sketches
        .into_iter()
        .map(sketch_from_dto)
        .collect::<PersistenceResult<Vec<_>>>()?;

    Ok(document)
}

fn sketch_from_dto(dto: SketchDto) -> PersistenceResult<Sketch> {
    let mut entities = EntityStore::new();
    for entity in dto.entities {
        insert_entity(&mut entities, entity)?;
    }

    Ok(Sketch {
        id: SketchId(dto.id),
        name: dto.name,
        visible: dto.visible,
        entities,
        constraints: dto.constraints.into_iter().map(constraint_from_dto).collect(),
    })
}

fn insert_entity(store: &mut EntityStore, entity: EntityDto) -> PersistenceResult<()> {
    match entity {
        EntityDto::Point(e) => store.add_point(Point2D {
            h: header_from_dto(e.header),
            p: vec2_from_dto(e.p),
        })?,
        EntityDto::Line(e) => store.add_line(Line2D {
            h: header_from_dto(e.header),
            a: vec2_from_dto(e.a),
            b: vec2_from_dto(e.b),
        })?,
        EntityDto::Circle(e) => store.add_circle(Circle2D {
            h: header_from_dto(e.header),
            center: vec2_from_dto(e.center),
            radius: e.radius,
        })?,
        EntityDto::Arc(e) => store.add_arc(Arc2D {
            h: header_from_dto(e.header),
            center: vec2_from_dto(e.center),
            radius: e.radius,
            start: vec2_from_dto(e.start),
            end: vec2_from_dto(e.end),
            ccw: e.ccw,
        })?,
        EntityDto::Ellipse(e) => store.add_ellipse(Ellipse2D {
            h: header_from_dto(e.header),
            center: vec2_from_dto(e.center),
            rx: e.rx,
            ry: e.ry,
            rotation: e.rotation,
        })?,
        EntityDto::Curve(e) => store.add_curve(Curve2D {
            h: header_from_dto(e.header),
            control_points: e.control_points.into_iter().map(vec2_from_dto).collect(),
            closed: e.closed,
        })?,
    };
    Ok(())
}

fn constraint_from_dto(dto: ConstraintDto) -> Constraint {
    match dto {
        ConstraintDto::Geometric(c) => Constraint::Geometric(GeometricConstraint {
            meta: meta_from_dto(c.meta),
            kind: c.kind,
            refs: c.refs.into_iter().map(ref_from_dto).collect(),
            param: c.param,
        }),
        ConstraintDto::Dimensional(c) => Constraint::Dimensional(DimensionalConstraint {
            meta: meta_from_dto(c.meta),
            kind: c.kind,
            refs: c.refs.into_iter().map(ref_from_dto).collect(),
            value: c.value,
            driving: c.driving,
            units: c.units,
        }),
    }
}

fn header_from_dto(h: EntityHeaderDto) -> EntityHeader {
    EntityHeader {
        id: EntityId(h.id),
        name: h.name,
        construction: h.construction,
        visible: h.visible,
        selectable: h.selectable,
    }
}

fn meta_from_dto(m: ConstraintMetaDto) -> ConstraintMeta {
    ConstraintMeta {
        id: ConstraintId(m.id),
        name: m.name,
        enabled: m.enabled,
        suppressed: m.suppressed,
    }
}

fn ref_from_dto(r: EntityRefDto) -> EntityRef {
    EntityRef {
        id: EntityId(r.id),
        anchor: r.anchor,
    }
}

fn vec2_from_dto(v: Vec2Dto) -> DVec2 {
    DVec2::new(v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pistachio_core::{
        DimensionalConstraintType, EntityAnchor, EntityKind, GeometricConstraintType, SketchError,
    };

    fn interleaved_sketch() -> Sketch {
        let mut sketch = Sketch::new(10, "Base");
        let store = &mut sketch.entities;
        store
            .add_circle(Circle2D::new(3, DVec2::new(5.0, 5.0), 2.0))
            .unwrap();
        store
            .add_line(Line2D::new(1, DVec2::ZERO, DVec2::new(10.0, 0.0)))
            .unwrap();
        store.add_point(Point2D::new(4, DVec2::ONE)).unwrap();
        store
            .add_line(Line2D::new(2, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)))
            .unwrap();
        store
            .add_curve(Curve2D::new(6, vec![DVec2::ZERO, DVec2::ONE]).with_closed(true))
            .unwrap();
        store
            .add_arc(Arc2D::new(5, DVec2::ZERO, 1.0, DVec2::X, DVec2::Y).with_ccw(false))
            .unwrap();
        store
            .add_ellipse(Ellipse2D::new(7, DVec2::ZERO, 3.0, 1.5).with_rotation(0.5))
            .unwrap();

        sketch.add_constraint(GeometricConstraint::new(
            1,
            GeometricConstraintType::Perpendicular,
            vec![EntityRef::whole(1), EntityRef::whole(2)],
        ));
        sketch.add_constraint(
            DimensionalConstraint::new(
                2,
                DimensionalConstraintType::Radius,
                vec![EntityRef::new(3, EntityAnchor::RadiusPoint)],
                2.0,
            )
            .driven(),
        );
        sketch
    }

    #[test]
    fn test_entities_grouped_by_kind() {
        let mut doc = Document::new(1, "Doc");
        doc.sketches.push(interleaved_sketch());

        let file = to_dto(&doc);
        let entities = &file.document.sketches[0].entities;
        let order: Vec<_> = entities.iter().map(|e| (e.kind(), e.header().id)).collect();

        assert_eq!(
            order,
            vec![
                (EntityKind::Point, 4),
                (EntityKind::Line, 1),
                (EntityKind::Line, 2),
                (EntityKind::Circle, 3),
                (EntityKind::Arc, 5),
                (EntityKind::Ellipse, 7),
                (EntityKind::Curve, 6),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let mut doc = Document::new(1, "Doc");
        doc.sketches.push(interleaved_sketch());
        let mut hidden = Sketch::new(11, "Hidden");
        hidden.visible = false;
        doc.sketches.push(hidden);

        let restored = from_dto(to_dto(&doc)).unwrap();

        assert_eq!(restored.id, doc.id);
        assert_eq!(restored.name, doc.name);
        assert_eq!(restored.sketches.len(), 2);
        assert!(!restored.sketches[1].visible);

        let (before, after) = (&doc.sketches[0], &restored.sketches[0]);
        assert_eq!(after.entities.points(), before.entities.points());
        assert_eq!(after.entities.lines(), before.entities.lines());
        assert_eq!(after.entities.circles(), before.entities.circles());
        assert_eq!(after.entities.arcs(), before.entities.arcs());
        assert_eq!(after.entities.ellipses(), before.entities.ellipses());
        assert_eq!(after.entities.curves(), before.entities.curves());
        assert_eq!(after.constraints, before.constraints);
    }

    #[test]
    fn test_version_mismatch() {
        let mut file = to_dto(&Document::new(1, "Doc"));
        file.file_version = SKETCH_FILE_VERSION + 1;

        assert!(matches!(
            from_dto(file),
            Err(PersistenceError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_duplicate_id_rejected_on_load() {
        let mut file = to_dto(&Document::new(1, "Doc"));
        file.document.sketches.push(SketchDto {
            id: 10,
            entities: vec![
                EntityDto::Point(PointDto {
                    header: EntityHeaderDto::new(5),
                    p: Vec2Dto::default(),
                }),
                EntityDto::Circle(CircleDto {
                    header: EntityHeaderDto::new(5),
                    ..CircleDto::default()
                }),
            ],
            ..SketchDto::default()
        });

        assert!(matches!(
            from_dto(file),
            Err(PersistenceError::Sketch(SketchError::DuplicateId(EntityId(5))))
        ));
    }

    #[test]
    fn test_same_id_in_different_sketches() {
        let mut doc = Document::new(1, "Doc");
        for sketch_id in [10, 11] {
            let mut sketch = Sketch::new(sketch_id, "");
            sketch
                .entities
                .add_point(Point2D::new(1, DVec2::ZERO))
                .unwrap();
            doc.sketches.push(sketch);
        }

        let restored = from_dto(to_dto(&doc)).unwrap();
        assert_eq!(restored.entity_count(), 2);
    }
}
