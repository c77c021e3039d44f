//! File schema mirror types
//!
//! Plain data structures mirroring the sketch model one-to-one. They are
//! what the wire codec reads and writes; the runtime model never touches
//! JSON directly. Defaults match the runtime model's defaults.
//!
//! Serialization is derived. Tagged unions serialize as `{kind, data}`
//! envelopes, enums as their raw wire integers, and header fields equal to
//! their default are skipped. Decoding goes through `codec` instead.

use pistachio_core::{
    DimensionalConstraintType, EntityAnchor, EntityKind, GeometricConstraintType,
};
use serde::{Serialize, Serializer};

/// Current file schema version. Files with any other version are rejected.
pub const SKETCH_FILE_VERSION: i64 = 1;

/// 2D coordinate on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2Dto {
    pub x: f64,
    pub y: f64,
}

impl Vec2Dto {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============== Serde helpers ==============

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_default_units(units: &str) -> bool {
    units == DEFAULT_UNITS
}

fn anchor_raw<S: Serializer>(anchor: &EntityAnchor, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(anchor.to_raw())
}

fn geometric_raw<S: Serializer>(kind: &GeometricConstraintType, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(kind.to_raw())
}

fn dimensional_raw<S: Serializer>(
    kind: &DimensionalConstraintType,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_u8(kind.to_raw())
}

// ============== Entities ==============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityHeaderDto {
    pub id: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_false")]
    pub construction: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub selectable: bool,
}

impl Default for EntityHeaderDto {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            construction: false,
            visible: true,
            selectable: true,
        }
    }
}

impl EntityHeaderDto {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PointDto {
    #[serde(flatten)]
    pub header: EntityHeaderDto,
    pub p: Vec2Dto,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LineDto {
    #[serde(flatten)]
    pub header: EntityHeaderDto,
    pub a: Vec2Dto,
    pub b: Vec2Dto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleDto {
    #[serde(flatten)]
    pub header: EntityHeaderDto,
    pub center: Vec2Dto,
    pub radius: f64,
}

impl Default for CircleDto {
    fn default() -> Self {
        Self {
            header: EntityHeaderDto::default(),
            center: Vec2Dto::default(),
            radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcDto {
    #[serde(flatten)]
    pub header: EntityHeaderDto,
    pub center: Vec2Dto,
    pub radius: f64,
    pub start: Vec2Dto,
    pub end: Vec2Dto,
    pub ccw: bool,
}

impl Default for ArcDto {
    fn default() -> Self {
        Self {
            header: EntityHeaderDto::default(),
            center: Vec2Dto::default(),
            radius: 1.0,
            start: Vec2Dto::default(),
            end: Vec2Dto::default(),
            ccw: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EllipseDto {
    #[serde(flatten)]
    pub header: EntityHeaderDto,
    pub center: Vec2Dto,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
}

impl Default for EllipseDto {
    fn default() -> Self {
        Self {
            header: EntityHeaderDto::default(),
            center: Vec2Dto::default(),
            rx: 2.0,
            ry: 1.0,
            rotation: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveDto {
    #[serde(flatten)]
    pub header: EntityHeaderDto,
    pub control_points: Vec<Vec2Dto>,
    pub closed: bool,
}

/// Any entity, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum EntityDto {
    Point(PointDto),
    Line(LineDto),
    Circle(CircleDto),
    Arc(ArcDto),
    Ellipse(EllipseDto),
    Curve(CurveDto),
}

impl EntityDto {
    /// Kind tag of this entity
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityDto::Point(_) => EntityKind::Point,
            EntityDto::Line(_) => EntityKind::Line,
            EntityDto::Circle(_) => EntityKind::Circle,
            EntityDto::Arc(_) => EntityKind::Arc,
            EntityDto::Ellipse(_) => EntityKind::Ellipse,
            EntityDto::Curve(_) => EntityKind::Curve,
        }
    }

    /// Shared header
    pub fn header(&self) -> &EntityHeaderDto {
        match self {
            EntityDto::Point(e) => &e.header,
            EntityDto::Line(e) => &e.header,
            EntityDto::Circle(e) => &e.header,
            EntityDto::Arc(e) => &e.header,
            EntityDto::Ellipse(e) => &e.header,
            EntityDto::Curve(e) => &e.header,
        }
    }
}

// ============== Constraints ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EntityRefDto {
    pub id: u64,
    #[serde(serialize_with = "anchor_raw")]
    pub anchor: EntityAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintMetaDto {
    pub id: u64,
    pub name: String,
    pub enabled: bool,
    pub suppressed: bool,
}

impl Default for ConstraintMetaDto {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            enabled: true,
            suppressed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeometricConstraintDto {
    pub meta: ConstraintMetaDto,
    #[serde(rename = "type", serialize_with = "geometric_raw")]
    pub kind: GeometricConstraintType,
    pub refs: Vec<EntityRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionalConstraintDto {
    pub meta: ConstraintMetaDto,
    #[serde(rename = "type", serialize_with = "dimensional_raw")]
    pub kind: DimensionalConstraintType,
    pub refs: Vec<EntityRefDto>,
    pub value: f64,
    pub driving: bool,
    #[serde(skip_serializing_if = "is_default_units")]
    pub units: String,
}

impl Default for DimensionalConstraintDto {
    fn default() -> Self {
        Self {
            meta: ConstraintMetaDto::default(),
            kind: DimensionalConstraintType::default(),
            refs: Vec::new(),
            value: 0.0,
            driving: true,
            units: DEFAULT_UNITS.to_string(),
        }
    }
}

/// Units written when a dimension carries none
pub const DEFAULT_UNITS: &str = "mm";

/// Any constraint, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum ConstraintDto {
    Geometric(GeometricConstraintDto),
    Dimensional(DimensionalConstraintDto),
}

// ============== Sketch / Document / File ==============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SketchDto {
    pub id: u64,
    pub name: String,
    pub visible: bool,
    pub entities: Vec<EntityDto>,
    pub constraints: Vec<ConstraintDto>,
}

impl Default for SketchDto {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            visible: true,
            entities: Vec::new(),
            constraints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocumentDto {
    pub id: u64,
    pub name: String,
    pub sketches: Vec<SketchDto>,
}

/// Top-level file wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDto {
    pub file_version: i64,
    pub document: DocumentDto,
}

impl Default for FileDto {
    fn default() -> Self {
        Self {
            file_version: SKETCH_FILE_VERSION,
            document: DocumentDto::default(),
        }
    }
}
