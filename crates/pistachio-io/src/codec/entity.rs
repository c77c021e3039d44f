//! Entity payload decoding
//!
//! The derived `Serialize` of [`EntityDto`] leaves out header fields equal
//! to their defaults. Decoding fills in the default for any absent header
//! key, so the result is the same whether or not a default was written.

use std::sync::LazyLock;

use pistachio_core::EntityKind;
use serde_json::Value;

use super::fields::{Fields, decode_vec2};
use super::registry::KindRegistry;
use crate::dto::{
    ArcDto, CircleDto, CurveDto, EllipseDto, EntityDto, EntityHeaderDto, LineDto, PointDto,
};
use crate::error::PersistenceResult;

static ENTITY_KINDS: LazyLock<KindRegistry<EntityDto>> = LazyLock::new(|| {
    KindRegistry::new("entity")
        .register(EntityKind::Point.as_str(), decode_point)
        .register(EntityKind::Line.as_str(), decode_line)
        .register(EntityKind::Circle.as_str(), decode_circle)
        .register(EntityKind::Arc.as_str(), decode_arc)
        .register(EntityKind::Ellipse.as_str(), decode_ellipse)
        .register(EntityKind::Curve.as_str(), decode_curve)
});

/// Decode a `{kind, data}` envelope into an entity
pub fn decode_entity(value: &Value) -> PersistenceResult<EntityDto> {
    ENTITY_KINDS.decode(value)
}

fn decode_header(fields: &Fields<'_>) -> PersistenceResult<EntityHeaderDto> {
    Ok(EntityHeaderDto {
        id: fields.u64("id")?,
        name: fields.string_or("name", "")?,
        construction: fields.bool_or("construction", false)?,
        visible: fields.bool_or("visible", true)?,
        selectable: fields.bool_or("selectable", true)?,
    })
}

fn decode_point(fields: &Fields<'_>) -> PersistenceResult<EntityDto> {
    Ok(EntityDto::Point(PointDto {
        header: decode_header(fields)?,
        p: fields.vec2("p")?,
    }))
}

fn decode_line(fields: &Fields<'_>) -> PersistenceResult<EntityDto> {
    Ok(EntityDto::Line(LineDto {
        header: decode_header(fields)?,
        a: fields.vec2("a")?,
        b: fields.vec2("b")?,
    }))
}

fn decode_circle(fields: &Fields<'_>) -> PersistenceResult<EntityDto> {
    Ok(EntityDto::Circle(CircleDto {
        header: decode_header(fields)?,
        center: fields.vec2("center")?,
        radius: fields.f64("radius")?,
    }))
}

fn decode_arc(fields: &Fields<'_>) -> PersistenceResult<EntityDto> {
    Ok(EntityDto::Arc(ArcDto {
        header: decode_header(fields)?,
        center: fields.vec2("center")?,
        radius: fields.f64("radius")?,
        start: fields.vec2("start")?,
        end: fields.vec2("end")?,
        ccw: fields.bool_or("ccw", true)?,
    }))
}

fn decode_ellipse(fields: &Fields<'_>) -> PersistenceResult<EntityDto> {
    Ok(EntityDto::Ellipse(EllipseDto {
        header: decode_header(fields)?,
        center: fields.vec2("center")?,
        rx: fields.f64("rx")?,
        ry: fields.f64("ry")?,
        rotation: fields.f64_or("rotation", 0.0)?,
    }))
}

fn decode_curve(fields: &Fields<'_>) -> PersistenceResult<EntityDto> {
    let control_points = fields
        .array_or_empty("controlPoints")?
        .iter()
        .map(decode_vec2)
        .collect::<PersistenceResult<Vec<_>>>()?;

    Ok(EntityDto::Curve(CurveDto {
        header: decode_header(fields)?,
        control_points,
        closed: fields.bool_or("closed", false)?,
    }))
}
