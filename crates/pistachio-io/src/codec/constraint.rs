//! Constraint payload decoding

use std::sync::LazyLock;

use pistachio_core::{
    ConstraintKind, DimensionalConstraintType, EntityAnchor, GeometricConstraintType,
};
use serde_json::Value;

use super::fields::Fields;
use super::registry::KindRegistry;
use crate::dto::{
    ConstraintDto, ConstraintMetaDto, DEFAULT_UNITS, DimensionalConstraintDto, EntityRefDto,
    GeometricConstraintDto,
};
use crate::error::PersistenceResult;

static CONSTRAINT_KINDS: LazyLock<KindRegistry<ConstraintDto>> = LazyLock::new(|| {
    KindRegistry::new("constraint")
        .register(ConstraintKind::Geometric.as_str(), decode_geometric)
        .register(ConstraintKind::Dimensional.as_str(), decode_dimensional)
});

/// Decode a `{kind, data}` envelope into a constraint
pub fn decode_constraint(value: &Value) -> PersistenceResult<ConstraintDto> {
    CONSTRAINT_KINDS.decode(value)
}

fn decode_meta(fields: &Fields<'_>) -> PersistenceResult<ConstraintMetaDto> {
    let meta = fields.object("meta", "ConstraintMeta")?;
    Ok(ConstraintMetaDto {
        id: meta.u64("id")?,
        name: meta.string_or("name", "")?,
        enabled: meta.bool_or("enabled", true)?,
        suppressed: meta.bool_or("suppressed", false)?,
    })
}

fn decode_refs(fields: &Fields<'_>) -> PersistenceResult<Vec<EntityRefDto>> {
    fields
        .array_or_empty("refs")?
        .iter()
        .map(|value| {
            let r = Fields::of(value, "EntityRef")?;
            let raw = r.i64("anchor")?;
            let anchor =
                EntityAnchor::from_raw(raw).ok_or_else(|| r.out_of_range("anchor", raw))?;
            Ok(EntityRefDto {
                id: r.u64("id")?,
                anchor,
            })
        })
        .collect()
}

fn decode_geometric(fields: &Fields<'_>) -> PersistenceResult<ConstraintDto> {
    let meta = decode_meta(fields)?;
    let raw = fields.i64("type")?;
    let kind =
        GeometricConstraintType::from_raw(raw).ok_or_else(|| fields.out_of_range("type", raw))?;

    Ok(ConstraintDto::Geometric(GeometricConstraintDto {
        meta,
        kind,
        refs: decode_refs(fields)?,
        param: fields.f64_opt("param")?,
    }))
}

fn decode_dimensional(fields: &Fields<'_>) -> PersistenceResult<ConstraintDto> {
    let meta = decode_meta(fields)?;
    let raw = fields.i64("type")?;
    let kind = DimensionalConstraintType::from_raw(raw)
        .ok_or_else(|| fields.out_of_range("type", raw))?;

    Ok(ConstraintDto::Dimensional(DimensionalConstraintDto {
        meta,
        kind,
        refs: decode_refs(fields)?,
        value: fields.f64("value")?,
        driving: fields.bool_or("driving", true)?,
        units: fields.string_or("units", DEFAULT_UNITS)?,
    }))
}
