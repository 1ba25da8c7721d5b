//! Identity-keyed array union.

use crate::error::CleanerError;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// How a manifest array element names the entity it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKey {
    /// Object arrays: a string field such as `id` or `taskId`.
    Field(&'static str),
    /// String arrays: the element is its own identity.
    Value,
}

impl IdentityKey {
    /// Identity of one element, `None` when the element carries no usable
    /// identity. Elements of the wrong kind are reported as malformed.
    pub fn identity<'a>(&self, element: &'a Value, path: &Path) -> Result<Option<&'a str>, CleanerError> {
        match self {
            IdentityKey::Field(field) => {
                let object = element.as_object().ok_or_else(|| {
                    CleanerError::malformed(path, "expected an array of objects")
                })?;
                Ok(object.get(*field).and_then(Value::as_str))
            }
            IdentityKey::Value => element
                .as_str()
                .map(Some)
                .ok_or_else(|| CleanerError::malformed(path, "expected an array of strings")),
        }
    }
}

/// Append every `src` element whose identity is not yet in `dest`, in source
/// order. Existing `dest` elements are never reordered or modified, and each
/// identity is appended at most once. Returns how many elements were added.
///
/// `src` elements without an identity are skipped; `dest` elements without
/// one are kept as they are.
pub fn union_by_identity(
    dest: &mut Vec<Value>,
    dest_path: &Path,
    src: &[Value],
    src_path: &Path,
    key: IdentityKey,
) -> Result<usize, CleanerError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(dest.len() + src.len());
    for element in dest.iter() {
        if let Some(id) = key.identity(element, dest_path)? {
            seen.insert(id.to_string());
        }
    }

    let mut added = 0;
    for element in src {
        match key.identity(element, src_path)? {
            Some(id) => {
                if seen.insert(id.to_string()) {
                    dest.push(element.clone());
                    added += 1;
                }
            }
            None => debug!(
                path = %src_path.display(),
                "Skipping merge-source element without identity"
            ),
        }
    }
    Ok(added)
}
