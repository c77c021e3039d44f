//! Pre-encode check for non-finite numbers
//!
//! JSON has no NaN or infinity; serde_json would write them as `null`,
//! which no decoder accepts. Every float in the tree is checked before
//! anything is serialized.

use crate::dto::{ConstraintDto, EntityDto, FileDto, Vec2Dto};
use crate::error::{PersistenceError, PersistenceResult};

pub(crate) fn check_file(file: &FileDto) -> PersistenceResult<()> {
    for sketch in &file.document.sketches {
        sketch.entities.iter().try_for_each(check_entity)?;
        sketch.constraints.iter().try_for_each(check_constraint)?;
    }
    Ok(())
}

fn check_entity(entity: &EntityDto) -> PersistenceResult<()> {
    let context = entity.kind().as_str();
    match entity {
        EntityDto::Point(e) => vec2(context, "p", e.p),
        EntityDto::Line(e) => {
            vec2(context, "a", e.a)?;
            vec2(context, "b", e.b)
        }
        EntityDto::Circle(e) => {
            vec2(context, "center", e.center)?;
            number(context, "radius", e.radius)
        }
        EntityDto::Arc(e) => {
            vec2(context, "center", e.center)?;
            number(context, "radius", e.radius)?;
            vec2(context, "start", e.start)?;
            vec2(context, "end", e.end)
        }
        EntityDto::Ellipse(e) => {
            vec2(context, "center", e.center)?;
            number(context, "rx", e.rx)?;
            number(context, "ry", e.ry)?;
            number(context, "rotation", e.rotation)
        }
        EntityDto::Curve(e) => e
            .control_points
            .iter()
            .try_for_each(|p| vec2(context, "controlPoints", *p)),
    }
}

fn check_constraint(constraint: &ConstraintDto) -> PersistenceResult<()> {
    match constraint {
        ConstraintDto::Geometric(c) => match c.param {
            Some(param) => number("Geometric", "param", param),
            None => Ok(()),
        },
        ConstraintDto::Dimensional(c) => number("Dimensional", "value", c.value),
    }
}

fn number(context: &'static str, field: &'static str, value: f64) -> PersistenceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PersistenceError::InvalidValue {
            context,
            field,
            reason: format!("non-finite value {}", value),
        })
    }
}

fn vec2(context: &'static str, field: &'static str, v: Vec2Dto) -> PersistenceResult<()> {
    number(context, field, v.x)?;
    number(context, field, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CircleDto, CurveDto, DimensionalConstraintDto, GeometricConstraintDto};

    #[test]
    fn test_finite_values_pass() {
        let entity = EntityDto::Curve(CurveDto {
            control_points: vec![Vec2Dto::new(0.0, -1e300), Vec2Dto::new(f64::MAX, 0.5)],
            ..CurveDto::default()
        });
        assert!(check_entity(&entity).is_ok());
    }

    #[test]
    fn test_non_finite_entity_field() {
        let entity = EntityDto::Circle(CircleDto {
            radius: f64::INFINITY,
            ..CircleDto::default()
        });
        assert!(matches!(
            check_entity(&entity),
            Err(PersistenceError::InvalidValue {
                context: "Circle",
                field: "radius",
                ..
            })
        ));

        let entity = EntityDto::Curve(CurveDto {
            control_points: vec![Vec2Dto::new(0.0, 0.0), Vec2Dto::new(f64::NAN, 1.0)],
            ..CurveDto::default()
        });
        assert!(matches!(
            check_entity(&entity),
            Err(PersistenceError::InvalidValue {
                field: "controlPoints",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_constraint_fields() {
        let geometric = ConstraintDto::Geometric(GeometricConstraintDto {
            param: Some(f64::NEG_INFINITY),
            ..GeometricConstraintDto::default()
        });
        assert!(matches!(
            check_constraint(&geometric),
            Err(PersistenceError::InvalidValue { field: "param", .. })
        ));

        let dimensional = ConstraintDto::Dimensional(DimensionalConstraintDto {
            value: f64::NAN,
            ..DimensionalConstraintDto::default()
        });
        assert!(matches!(
            check_constraint(&dimensional),
            Err(PersistenceError::InvalidValue { field: "value", .. })
        ));
    }
}
