//! Response-schema derivation for structured generation
//!
//! Gemini's `responseSchema` accepts a JSON-Schema subset (`type`,
//! `properties`, `required`, `description`). We derive it from the Rust
//! type's schemars schema so the field doc comments become the
//! natural-language generation hints, then strip the metadata keys the
//! API does not understand.

use schemars::{JsonSchema, schema_for};
use serde_json::Value;

/// Keys emitted by schemars that the Gemini API rejects or ignores
const META_KEYS: &[&str] = &["$schema", "title", "$defs", "definitions"];

/// Build a Gemini `responseSchema` document for `T`
pub fn response_schema_for<T: JsonSchema>() -> Value {
    let schema = schema_for!(T);
    let mut value = schema.to_value();

    if let Some(obj) = value.as_object_mut() {
        for key in META_KEYS {
            obj.remove(*key);
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Campaign;

    #[test]
    fn campaign_schema_has_four_required_string_properties() {
        let schema = response_schema_for::<Campaign>();

        assert_eq!(schema["type"], "object");

        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        for field in ["subject", "previewText", "body", "imagePrompt"] {
            assert!(required.contains(&field), "{field} should be required");
            assert_eq!(schema["properties"][field]["type"], "string");
            assert!(
                schema["properties"][field]["description"]
                    .as_str()
                    .is_some_and(|d| !d.is_empty()),
                "{field} should carry a generation hint"
            );
        }
    }

    #[test]
    fn metadata_keys_are_stripped() {
        let schema = response_schema_for::<Campaign>();
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
    }
}
