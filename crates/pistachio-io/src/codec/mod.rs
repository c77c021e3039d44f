//! JSON wire codec
//!
//! Converts the DTO tree to and from `serde_json::Value`. Entities and
//! constraints are `{kind, data}` envelopes. Encoding uses the DTOs'
//! derived `Serialize` after a finiteness check; decoding reads fields by
//! hand through per-union kind registries so that errors name the missing
//! or malformed key.
//!
//! ```text
//! { "fileVersion": 1,
//!   "document": { "id", "name", "sketches": [
//!     { "id", "name", "visible",
//!       "entities":    [ { "kind": "Line",      "data": { ... } } ],
//!       "constraints": [ { "kind": "Geometric", "data": { ... } } ] } ] } }
//! ```

mod constraint;
mod entity;
mod fields;
mod finite;
mod registry;

pub use constraint::decode_constraint;
pub use entity::decode_entity;

use serde_json::Value;

use self::fields::Fields;
use crate::dto::{DocumentDto, FileDto, SKETCH_FILE_VERSION, SketchDto};
use crate::error::{PersistenceError, PersistenceResult};

/// Encode a whole file
///
/// Fails with `InvalidValue` before anything is written if the tree holds a
/// NaN or infinite number.
pub fn encode_file(file: &FileDto) -> PersistenceResult<Value> {
    finite::check_file(file)?;
    Ok(serde_json::to_value(file)?)
}

/// Decode a whole file
///
/// The schema version is checked before the document is touched. An absent
/// `fileVersion` is taken to be the current one.
pub fn decode_file(value: &Value) -> PersistenceResult<FileDto> {
    let fields = Fields::of(value, "file")?;

    let file_version = fields.i64_or("fileVersion", SKETCH_FILE_VERSION)?;
    if file_version != SKETCH_FILE_VERSION {
        tracing::warn!(
            "Rejecting file version {} (supported: {})",
            file_version,
            SKETCH_FILE_VERSION
        );
        return Err(PersistenceError::UnsupportedVersion {
            found: file_version,
            expected: SKETCH_FILE_VERSION,
        });
    }

    let document = fields.object("document", "document")?;
    Ok(FileDto {
        file_version,
        document: decode_document(&document)?,
    })
}

/// Serialize a file to pretty-printed JSON bytes
pub fn to_vec_pretty(file: &FileDto) -> PersistenceResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&encode_file(file)?)?)
}

/// Parse JSON bytes into a file
pub fn from_slice(data: &[u8]) -> PersistenceResult<FileDto> {
    let value: Value = serde_json::from_slice(data)?;
    decode_file(&value)
}

fn decode_document(fields: &Fields<'_>) -> PersistenceResult<DocumentDto> {
    let sketches = fields
        .array_or_empty("sketches")?
        .iter()
        .map(|value| decode_sketch(&Fields::of(value, "sketch")?))
        .collect::<PersistenceResult<Vec<_>>>()?;

    Ok(DocumentDto {
        id: fields.u64("id")?,
        name: fields.string_or("name", "")?,
        sketches,
    })
}

fn decode_sketch(fields: &Fields<'_>) -> PersistenceResult<SketchDto> {
    let id = fields.u64("id")?;
    let entities = fields
        .array_or_empty("entities")?
        .iter()
        .map(decode_entity)
        .collect::<PersistenceResult<Vec<_>>>()?;
    let constraints = fields
        .array_or_empty("constraints")?
        .iter()
        .map(decode_constraint)
        .collect::<PersistenceResult<Vec<_>>>()?;

    Ok(SketchDto {
        id,
        name: fields.string_or("name", "")?,
        visible: fields.bool_or("visible", true)?,
        entities,
        constraints,
    })
}
