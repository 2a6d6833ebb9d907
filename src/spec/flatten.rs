use crate::error::{DocsError, Result};
use crate::spec::SpecDocument;
use serde_json::{json, Value};

/// Expand references into a self-contained document.
///
/// Schema-level references are expanded like any other. Expansion is best
/// effort: an unresolvable reference is left in place and the remaining
/// references are still processed. A circular reference is kept as an
/// absolute internal pointer, so the output needs no fixup pass.
///
/// Fails only when expansion cannot proceed at all, i.e. the document root
/// is not an object.
pub fn expand(doc: &SpecDocument) -> Result<Value> {
    if !doc.value.is_object() {
        return Err(DocsError::Expansion(
            "document root is not an object".to_string(),
        ));
    }
    let mut trail = Vec::new();
    Ok(expand_node(&doc.value, doc, &mut trail))
}

fn expand_node(node: &Value, doc: &SpecDocument, trail: &mut Vec<String>) -> Value {
    match node {
        Value::Object(map) => {
            if let Some(Value::String(reference)) = map.get("$ref") {
                return expand_reference(reference, doc, trail);
            }
            Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), expand_node(v, doc, trail)))
                    .collect(),
            )
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| expand_node(v, doc, trail)).collect())
        }
        other => other.clone(),
    }
}

fn expand_reference(reference: &str, doc: &SpecDocument, trail: &mut Vec<String>) -> Value {
    // The trail is keyed by origin so cycles are caught across documents.
    let key = format!("{}#{}", doc.origin_key(), reference);
    if let Some(pointer) = reference.strip_prefix('#') {
        if trail.contains(&key) {
            // Circular: represent as an absolute internal pointer.
            return json!({ "$ref": format!("#{pointer}") });
        }
        match doc.value.pointer(pointer) {
            Some(target) => {
                trail.push(key);
                let expanded = expand_node(target, doc, trail);
                trail.pop();
                expanded
            }
            None => json!({ "$ref": reference }),
        }
    } else {
        if trail.contains(&key) {
            return json!({ "$ref": reference });
        }
        let (target, fragment) = match reference.split_once('#') {
            Some((t, f)) => (t, Some(f)),
            None => (reference, None),
        };
        let Some(external) = doc.fetch_relative(target) else {
            return json!({ "$ref": reference });
        };
        trail.push(key);
        let expanded = match fragment {
            Some(pointer) => match external.value.pointer(pointer) {
                Some(target_value) => expand_node(target_value, &external, trail),
                None => json!({ "$ref": reference }),
            },
            None => expand_node(&external.value, &external, trail),
        };
        trail.pop();
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Origin;
    use std::path::PathBuf;

    fn doc(value: Value) -> SpecDocument {
        SpecDocument::new(value, Origin::File(PathBuf::from("spec.json")))
    }

    #[test]
    fn test_expands_internal_reference() {
        let expanded = expand(&doc(json!({
            "definitions": { "Pet": { "type": "object" } },
            "schema": { "$ref": "#/definitions/Pet" }
        })))
        .unwrap();
        assert_eq!(expanded["schema"], json!({ "type": "object" }));
    }

    #[test]
    fn test_unresolvable_reference_left_in_place() {
        let expanded = expand(&doc(json!({
            "a": { "$ref": "#/definitions/Missing" },
            "b": { "definitions": 1 }
        })))
        .unwrap();
        assert_eq!(expanded["a"], json!({ "$ref": "#/definitions/Missing" }));
        // Expansion continued past the failure.
        assert_eq!(expanded["b"], json!({ "definitions": 1 }));
    }

    #[test]
    fn test_circular_reference_stays_absolute() {
        let expanded = expand(&doc(json!({
            "definitions": {
                "Node": {
                    "properties": { "next": { "$ref": "#/definitions/Node" } }
                }
            }
        })))
        .unwrap();
        assert_eq!(
            expanded["definitions"]["Node"]["properties"]["next"]["properties"]["next"],
            json!({ "$ref": "#/definitions/Node" })
        );
    }

    #[test]
    fn test_non_object_root_cannot_expand() {
        let err = expand(&doc(json!(["not", "an", "object"]))).unwrap_err();
        assert!(matches!(err, DocsError::Expansion(_)));
    }
}
