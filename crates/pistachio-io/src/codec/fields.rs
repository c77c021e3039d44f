//! Typed access to JSON object fields
//!
//! Required keys fail with `MissingField`; optional keys fall back to the
//! given default. A key that is present with the wrong type always fails
//! with `InvalidValue`, whether it is required or not.

use serde_json::{Map, Value};

use crate::dto::Vec2Dto;
use crate::error::{PersistenceError, PersistenceResult};

/// A JSON object being decoded, tagged with a context name for errors
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    context: &'static str,
}

impl<'a> Fields<'a> {
    /// View `value` as an object, failing if it is anything else
    pub fn of(value: &'a Value, context: &'static str) -> PersistenceResult<Self> {
        match value.as_object() {
            Some(map) => Ok(Self { map, context }),
            None => Err(PersistenceError::InvalidValue {
                context,
                field: "<root>",
                reason: format!("expected object, found {}", type_name(value)),
            }),
        }
    }

    fn invalid(&self, field: &'static str, expected: &str, found: &Value) -> PersistenceError {
        PersistenceError::InvalidValue {
            context: self.context,
            field,
            reason: format!("expected {}, found {}", expected, type_name(found)),
        }
    }

    fn get(&self, field: &'static str) -> Option<&'a Value> {
        self.map.get(field)
    }

    fn require(&self, field: &'static str) -> PersistenceResult<&'a Value> {
        self.get(field).ok_or(PersistenceError::MissingField {
            context: self.context,
            field,
        })
    }

    pub fn u64(&self, field: &'static str) -> PersistenceResult<u64> {
        let value = self.require(field)?;
        value
            .as_u64()
            .ok_or_else(|| self.invalid(field, "unsigned integer", value))
    }

    pub fn i64(&self, field: &'static str) -> PersistenceResult<i64> {
        let value = self.require(field)?;
        value
            .as_i64()
            .ok_or_else(|| self.invalid(field, "integer", value))
    }

    pub fn i64_or(&self, field: &'static str, default: i64) -> PersistenceResult<i64> {
        match self.get(field) {
            Some(_) => self.i64(field),
            None => Ok(default),
        }
    }

    pub fn f64(&self, field: &'static str) -> PersistenceResult<f64> {
        let value = self.require(field)?;
        value
            .as_f64()
            .ok_or_else(|| self.invalid(field, "number", value))
    }

    pub fn f64_or(&self, field: &'static str, default: f64) -> PersistenceResult<f64> {
        match self.get(field) {
            Some(_) => self.f64(field),
            None => Ok(default),
        }
    }

    pub fn f64_opt(&self, field: &'static str) -> PersistenceResult<Option<f64>> {
        match self.get(field) {
            Some(_) => self.f64(field).map(Some),
            None => Ok(None),
        }
    }

    pub fn bool_or(&self, field: &'static str, default: bool) -> PersistenceResult<bool> {
        match self.get(field) {
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.invalid(field, "boolean", value)),
            None => Ok(default),
        }
    }

    pub fn str(&self, field: &'static str) -> PersistenceResult<&'a str> {
        let value = self.require(field)?;
        value
            .as_str()
            .ok_or_else(|| self.invalid(field, "string", value))
    }

    pub fn string_or(&self, field: &'static str, default: &str) -> PersistenceResult<String> {
        match self.get(field) {
            Some(_) => self.str(field).map(str::to_string),
            None => Ok(default.to_string()),
        }
    }

    /// Required nested object
    pub fn object(
        &self,
        field: &'static str,
        context: &'static str,
    ) -> PersistenceResult<Fields<'a>> {
        let value = self.require(field)?;
        Fields::of(value, context)
    }

    /// Optional array, empty when absent
    pub fn array_or_empty(&self, field: &'static str) -> PersistenceResult<&'a [Value]> {
        match self.get(field) {
            Some(value) => value
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| self.invalid(field, "array", value)),
            None => Ok(&[]),
        }
    }

    /// Required `{x, y}` coordinate
    pub fn vec2(&self, field: &'static str) -> PersistenceResult<Vec2Dto> {
        let value = self.require(field)?;
        decode_vec2(value)
    }

    /// Reject an integer outside an enum's range
    pub fn out_of_range(&self, field: &'static str, raw: i64) -> PersistenceError {
        PersistenceError::InvalidValue {
            context: self.context,
            field,
            reason: format!("{} is not a known value", raw),
        }
    }
}

pub(crate) fn decode_vec2(value: &Value) -> PersistenceResult<Vec2Dto> {
    let fields = Fields::of(value, "Vec2")?;
    Ok(Vec2Dto {
        x: fields.f64("x")?,
        y: fields.f64("y")?,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
