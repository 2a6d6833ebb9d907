use crate::error::{DocsError, Result};
use crate::spec::{expand, SpecDocument};
use serde_json::Value;

/// Produce the canonical byte representation of a loaded document,
/// optionally expanding references first.
///
/// The output is what the document route serves, rendered once per run and
/// shared read-only with the handler chain.
pub fn process(doc: &SpecDocument, flatten: bool) -> Result<Vec<u8>> {
    let value = if flatten {
        expand(doc)?
    } else {
        doc.value.clone()
    };
    to_canonical_bytes(&value)
}

/// Serialize with deterministic key ordering and two-space indentation.
///
/// Key order is stable across runs (objects are kept sorted), which makes
/// the output diffable and byte-for-byte reproducible.
pub fn to_canonical_bytes(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| DocsError::Serialization(e.to_string()))
}
