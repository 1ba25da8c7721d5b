//! JSON file helpers. Every error names the file it came from.

use crate::error::CleanerError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub fn read_value(path: &Path) -> Result<Value, CleanerError> {
    read_typed(path)
}

pub fn read_typed<T: DeserializeOwned>(path: &Path) -> Result<T, CleanerError> {
    let bytes = fs::read(path).map_err(|e| CleanerError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|source| CleanerError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print with a one-space indent, the layout guide manifests are
/// stored in.
pub fn to_pretty_bytes<T: Serialize>(value: &T, path: &Path) -> Result<Vec<u8>, CleanerError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
    value
        .serialize(&mut serializer)
        .map_err(|source| CleanerError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(out)
}

/// The document must be a top-level array.
pub fn as_array_mut<'a>(value: &'a mut Value, path: &Path) -> Result<&'a mut Vec<Value>, CleanerError> {
    value
        .as_array_mut()
        .ok_or_else(|| CleanerError::malformed(path, "expected a top-level JSON array"))
}

/// The document must be an object carrying an array under `key`.
pub fn array_field<'a>(value: &'a Value, key: &str, path: &Path) -> Result<&'a Vec<Value>, CleanerError> {
    object(value, path)?
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| CleanerError::malformed(path, format!("missing `{}` array", key)))
}

pub fn array_field_mut<'a>(
    value: &'a mut Value,
    key: &str,
    path: &Path,
) -> Result<&'a mut Vec<Value>, CleanerError> {
    value
        .as_object_mut()
        .ok_or_else(|| CleanerError::malformed(path, "expected a JSON object"))?
        .get_mut(key)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| CleanerError::malformed(path, format!("missing `{}` array", key)))
}

fn object<'a>(value: &'a Value, path: &Path) -> Result<&'a Map<String, Value>, CleanerError> {
    value
        .as_object()
        .ok_or_else(|| CleanerError::malformed(path, "expected a JSON object"))
}
