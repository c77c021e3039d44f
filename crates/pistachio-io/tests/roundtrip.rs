//! File-level save/load tests for the JSON adapter

use std::fs;
use std::sync::Arc;

use pistachio_core::{
    Arc2D, Circle2D, Curve2D, DVec2, DimensionalConstraint, DimensionalConstraintType, Document,
    Ellipse2D, EntityAnchor, EntityId, EntityRef, GeometricConstraint, GeometricConstraintType,
    Line2D, Point2D, Sketch, SketchEntity, SketchError, SketchId,
};
use pistachio_io::{
    BackgroundLoad, DocumentPersistence, JsonDocumentAdapter, PersistenceError,
    SKETCH_FILE_VERSION, save_document_to_bytes,
};
use tempfile::tempdir;

fn full_document() -> Document {
    let mut sketch = Sketch::new(10, "Profile");
    let store = &mut sketch.entities;
    store
        .add_point(Point2D::new(1, DVec2::new(0.1, 0.2)).with_name("origin"))
        .unwrap();
    store
        .add_line(Line2D::new(2, DVec2::ZERO, DVec2::new(10.0, 0.0)))
        .unwrap();
    store
        .add_circle(Circle2D::new(3, DVec2::new(5.0, 5.0), 1.0 / 3.0).as_construction())
        .unwrap();
    store
        .add_arc(Arc2D::new(
            4,
            DVec2::ZERO,
            2.0,
            DVec2::new(2.0, 0.0),
            DVec2::new(0.0, 2.0),
        ))
        .unwrap();
    store
        .add_ellipse(Ellipse2D::new(5, DVec2::ONE, 4.0, 2.0).with_rotation(0.3).hidden())
        .unwrap();
    store
        .add_curve(Curve2D::new(6, vec![DVec2::ZERO, DVec2::X, DVec2::ONE]).with_closed(true))
        .unwrap();

    sketch.add_constraint(GeometricConstraint::new(
        1,
        GeometricConstraintType::Tangent,
        vec![
            EntityRef::whole(2),
            EntityRef::new(3, EntityAnchor::Center),
        ],
    ));
    sketch.add_constraint(
        DimensionalConstraint::new(
            2,
            DimensionalConstraintType::Angle,
            vec![EntityRef::whole(2), EntityRef::whole(4)],
            45.0,
        )
        .with_units("deg"),
    );

    let mut doc = Document::new(1, "Full");
    doc.sketches.push(sketch);
    doc.sketches.push(Sketch::new(11, "Empty"));
    doc
}

#[test]
fn test_minimal_document_round_trip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("minimal.sketch.json");

    let mut sketch = Sketch::new(10, "");
    sketch
        .entities
        .add_line(Line2D::new(100, DVec2::ZERO, DVec2::new(10.0, 0.0)))
        .unwrap();
    sketch.add_constraint(GeometricConstraint::new(
        1,
        GeometricConstraintType::Horizontal,
        vec![EntityRef::new(100, EntityAnchor::LineStart)],
    ));
    let mut doc = Document::new(1, "Doc");
    doc.sketches.push(sketch);

    let adapter = JsonDocumentAdapter::new();
    adapter.save_document(&doc, &path).unwrap();
    let loaded = adapter.load_document(&path).unwrap();

    assert_eq!(loaded.name, "Doc");
    let sketch = loaded.sketch(SketchId(10)).unwrap();
    let line = sketch.entities.line(0).unwrap();
    assert_eq!(line.id(), EntityId(100));
    assert_eq!(line.b, DVec2::new(10.0, 0.0));
    assert_eq!(sketch.constraints.len(), 1);
    assert_eq!(
        sketch.constraints[0].refs(),
        &[EntityRef::new(100, EntityAnchor::LineStart)]
    );
}

#[test]
fn test_full_document_round_trip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("full.pistachio.json");
    let doc = full_document();

    let adapter = JsonDocumentAdapter;
    adapter.save_document(&doc, &path).unwrap();
    assert_eq!(adapter.load_document(&path).unwrap(), doc);
}

#[test]
fn test_file_layout() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("layout.sketch.json");
    JsonDocumentAdapter
        .save_document(&full_document(), &path)
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["fileVersion"], SKETCH_FILE_VERSION);
    let sketch = &value["document"]["sketches"][0];
    assert_eq!(sketch["entities"][0]["kind"], "Point");
    assert_eq!(sketch["constraints"][1]["kind"], "Dimensional");
    assert_eq!(sketch["constraints"][1]["data"]["units"], "deg");
}

#[test]
fn test_duplicate_entity_id_in_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("dup.sketch.json");
    fs::write(
        &path,
        r#"{
          "fileVersion": 1,
          "document": { "id": 1, "name": "Dup", "sketches": [ { "id": 10, "entities": [
            { "kind": "Point", "data": { "id": 5, "p": { "x": 0, "y": 0 } } },
            { "kind": "Line",  "data": { "id": 5, "a": { "x": 0, "y": 0 }, "b": { "x": 1, "y": 0 } } }
          ] } ] }
        }"#,
    )
    .unwrap();

    assert!(matches!(
        JsonDocumentAdapter.load_document(&path),
        Err(PersistenceError::Sketch(SketchError::DuplicateId(EntityId(5))))
    ));
}

#[test]
fn test_unsupported_version_in_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("future.sketch.json");
    fs::write(&path, r#"{ "fileVersion": 99, "document": { "id": 1 } }"#).unwrap();

    assert!(matches!(
        JsonDocumentAdapter.load_document(&path),
        Err(PersistenceError::UnsupportedVersion { found: 99, .. })
    ));
}

#[test]
fn test_non_finite_radius_not_saved() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("infinite.sketch.json");

    let mut sketch = Sketch::new(10, "Bad");
    sketch
        .entities
        .add_circle(Circle2D::new(1, DVec2::ZERO, f64::INFINITY))
        .unwrap();
    let mut doc = Document::new(1, "Bad");
    doc.sketches.push(sketch);

    assert!(matches!(
        save_document_to_bytes(&doc),
        Err(PersistenceError::InvalidValue {
            context: "Circle",
            field: "radius",
            ..
        })
    ));
    assert!(matches!(
        JsonDocumentAdapter.save_document(&doc, &path),
        Err(PersistenceError::InvalidValue { field: "radius", .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_background_load_from_disk() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bg.sketch.json");
    let doc = full_document();
    JsonDocumentAdapter.save_document(&doc, &path).unwrap();

    let load = BackgroundLoad::spawn(Arc::new(JsonDocumentAdapter), &path);
    assert_eq!(load.wait().unwrap().unwrap(), doc);
}
