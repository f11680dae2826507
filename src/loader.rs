//! Property loading from JSON documents.
//!
//! A document is an object mapping property names to values. Arrays become
//! appended sequences.
//!
//! ```json
//! {
//!   "og:title": "The Rock",
//!   "og:type": "video.movie",
//!   "video:tag": ["action", "1996"]
//! }
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::item::OpenGraphItem;
use crate::types::Scalar;

/// Load properties from a JSON file.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist, or a parse
/// error if the document isn't a valid property object.
pub fn load_properties(path: &Path) -> Result<OpenGraphItem, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Bytes, so a non-UTF-8 file is a JSON error rather than an I/O error.
    let content = std::fs::read(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loading properties");
    let document: Value =
        serde_json::from_slice(&content).map_err(|source| LoadError::InvalidJson { source })?;
    properties_from_value(&document)
}

/// Load properties from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` for malformed JSON, `LoadError::NotAnObject`
/// for a non-object document, and `LoadError::InvalidValue` for values that
/// have no property representation.
pub fn load_properties_str(content: &str) -> Result<OpenGraphItem, LoadError> {
    let document: Value =
        serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })?;
    properties_from_value(&document)
}

/// Build an item from an already-parsed JSON object.
pub fn properties_from_value(document: &Value) -> Result<OpenGraphItem, LoadError> {
    let map = document.as_object().ok_or_else(|| LoadError::NotAnObject {
        actual: json_type_name(document).to_string(),
    })?;

    let mut item = OpenGraphItem::new();
    for (name, value) in map {
        match value {
            Value::Array(values) => {
                if values.is_empty() {
                    return Err(invalid(name, "empty arrays are not allowed"));
                }
                for v in values {
                    item.append(name.as_str(), scalar(name, v)?);
                }
            }
            _ => item.set(name.as_str(), scalar(name, value)?),
        }
    }
    Ok(item)
}

fn scalar(name: &str, value: &Value) -> Result<Scalar, LoadError> {
    match value {
        Value::String(s) => Ok(Scalar::Text(s.clone())),
        Value::Bool(b) => Ok(Scalar::Boolean(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(Scalar::Integer)
            .ok_or_else(|| invalid(name, &format!("{n} is not a 64-bit integer"))),
        other => Err(invalid(
            name,
            &format!("{} values are not allowed", json_type_name(other)),
        )),
    }
}

fn invalid(property: &str, reason: &str) -> LoadError {
    LoadError::InvalidValue {
        property: property.to_string(),
        reason: reason.to_string(),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
