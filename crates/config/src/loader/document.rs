//! YAML stream decoding.
//!
//! Responsibilities:
//! - Decode a byte stream into exactly one `serde_yaml::Value`.
//! - Expand `<<` merge keys into their surrounding mappings.
//!
//! Invariants:
//! - A stream with no documents (empty, whitespace, comments) decodes to an empty mapping.
//! - An explicit empty document (`---`) or `~` decodes to null.
//! - A stream with more than one document is rejected.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::error::ParseError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse document bytes into a value.
///
/// Encoding is detected by the YAML reader, so UTF-8 and BOM-prefixed UTF-16
/// input are both accepted.
pub fn parse_document(bytes: &[u8]) -> Result<Value, ParseError> {
    // The YAML reader reports an empty stream as a single null document.
    if is_empty_stream(bytes) {
        tracing::debug!(documents = 0, "Decoded YAML stream");
        return Ok(Value::Mapping(Mapping::new()));
    }

    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_slice(bytes) {
        documents.push(Value::deserialize(document)?);
    }

    let count = documents.len();
    tracing::debug!(documents = count, "Decoded YAML stream");

    let mut documents = documents.into_iter();
    match (documents.next(), documents.next()) {
        (None, _) => Ok(Value::Mapping(Mapping::new())),
        (Some(mut value), None) => {
            value.apply_merge()?;
            Ok(value)
        }
        (Some(_), Some(_)) => Err(ParseError::MultipleDocuments { count }),
    }
}

/// True when a UTF-8 stream holds only blank lines and comments.
fn is_empty_stream(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let Ok(text) = std::str::from_utf8(bytes) else {
        return false;
    };

    text.lines().all(|line| {
        let line = line.trim_start();
        line.is_empty() || line.starts_with('#')
    })
}
