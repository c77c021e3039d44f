//! Kind-tag dispatch for tagged unions
//!
//! Every tagged-union value on the wire is an envelope
//! `{ "kind": <tag>, "data": { ... } }`. A [`KindRegistry`] maps each tag to
//! the decoder for its payload. Registries are built once, on first use.

use std::collections::HashMap;

use serde_json::Value;

use super::fields::Fields;
use crate::error::{PersistenceError, PersistenceResult};

/// Decoder for one payload kind
pub(crate) type DecodeFn<T> = fn(&Fields<'_>) -> PersistenceResult<T>;

/// Tag to payload-decoder table for one tagged union
pub(crate) struct KindRegistry<T> {
    /// Union name used in error messages
    union: &'static str,
    decoders: HashMap<&'static str, DecodeFn<T>>,
}

impl<T> KindRegistry<T> {
    /// Create an empty registry
    pub fn new(union: &'static str) -> Self {
        Self {
            union,
            decoders: HashMap::new(),
        }
    }

    /// Register the decoder for a tag
    pub fn register(mut self, tag: &'static str, decode: DecodeFn<T>) -> Self {
        let previous = self.decoders.insert(tag, decode);
        debug_assert!(previous.is_none(), "tag {tag} registered twice");
        self
    }

    /// Decode an envelope
    ///
    /// The tag is resolved before the payload is looked at, so an unknown
    /// tag is reported as `UnknownKind` even when `data` is missing too.
    pub fn decode(&self, envelope: &Value) -> PersistenceResult<T> {
        let fields = Fields::of(envelope, self.union)?;
        let kind = fields.str("kind")?;
        let decode = self
            .decoders
            .get(kind)
            .ok_or_else(|| PersistenceError::UnknownKind {
                union: self.union,
                kind: kind.to_string(),
            })?;
        let data = fields.object("data", self.union)?;
        decode(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_number(fields: &Fields<'_>) -> PersistenceResult<f64> {
        fields.f64("n")
    }

    fn registry() -> KindRegistry<f64> {
        KindRegistry::new("number").register("Plain", decode_number)
    }

    #[test]
    fn test_dispatch() {
        let value = json!({ "kind": "Plain", "data": { "n": 4.0 } });
        assert_eq!(registry().decode(&value).unwrap(), 4.0);
    }

    #[test]
    fn test_unknown_kind() {
        let value = json!({ "kind": "Fancy" });
        match registry().decode(&value) {
            Err(PersistenceError::UnknownKind { union, kind }) => {
                assert_eq!(union, "number");
                assert_eq!(kind, "Fancy");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_missing_kind_and_data() {
        assert!(matches!(
            registry().decode(&json!({ "data": {} })),
            Err(PersistenceError::MissingField { field: "kind", .. })
        ));
        assert!(matches!(
            registry().decode(&json!({ "kind": "Plain" })),
            Err(PersistenceError::MissingField { field: "data", .. })
        ));
    }
}
