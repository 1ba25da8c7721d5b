//! Identity-keyed manifest array merging.

use crate::actions::Actions;
use crate::error::CleanerError;
use crate::manifest::json;
use crate::manifest::{union_by_identity, IdentityKey};
use crate::project::{Project, SchemaVersion};
use crate::tree::path::{file_name, relative_to};
use crate::tree::Walker;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the array sits inside its manifest document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLocation {
    /// The document itself is the array
    Document,
    /// The document is an object holding the array under this key
    Field(&'static str),
}

/// One array taking part in a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestArray {
    /// Manifest path relative to the guides directory
    pub file: PathBuf,
    pub location: ArrayLocation,
    pub key: IdentityKey,
}

impl ManifestArray {
    fn new(file: impl Into<PathBuf>, location: ArrayLocation, key: IdentityKey) -> Self {
        Self {
            file: file.into(),
            location,
            key,
        }
    }
}

/// Arrays merged for `version`, as found in the merge source.
///
/// V2 has three fixed manifests. V3 has one `order` array per content
/// directory, so every `index.json` under the source content tree counts.
pub fn manifest_arrays(src: &Project, version: SchemaVersion) -> Result<Vec<ManifestArray>, CleanerError> {
    match version {
        SchemaVersion::V2 => Ok(vec![
            ManifestArray::new(
                "assessments.json",
                ArrayLocation::Document,
                IdentityKey::Field("taskId"),
            ),
            ManifestArray::new(
                "metadata.json",
                ArrayLocation::Field("sections"),
                IdentityKey::Field("id"),
            ),
            ManifestArray::new(
                "book.json",
                ArrayLocation::Field("children"),
                IdentityKey::Field("id"),
            ),
        ]),
        SchemaVersion::V3 => {
            let content = src.content_dir();
            if !content.is_dir() {
                return Ok(Vec::new());
            }
            let mut arrays = Vec::new();
            for path in Walker::new(&content).files()? {
                if file_name(&path) != Project::index_file_name() {
                    continue;
                }
                if let Some(file) = relative_to(src.guides(), &path) {
                    arrays.push(ManifestArray::new(
                        file,
                        ArrayLocation::Field("order"),
                        IdentityKey::Value,
                    ));
                }
            }
            Ok(arrays)
        }
    }
}

/// Append the source elements of `array` missing from the destination copy
/// of the same manifest. The destination file is rewritten only when
/// something was appended. Returns the number of appended elements.
pub fn merge_manifest_array(
    dest: &Project,
    src: &Project,
    array: &ManifestArray,
    actions: &mut Actions,
) -> Result<usize, CleanerError> {
    let src_path = src.guides().join(&array.file);
    let dest_path = dest.guides().join(&array.file);

    let src_doc = json::read_value(&src_path)?;
    let src_items = items(&src_doc, array.location, &src_path)?;

    if actions.dry_run() && !dest_path.exists() {
        // Would have been copied verbatim from the source
        return Ok(0);
    }

    let mut dest_doc = json::read_value(&dest_path)?;
    let dest_items = items_mut(&mut dest_doc, array.location, &dest_path)?;
    let appended = union_by_identity(dest_items, &dest_path, src_items, &src_path, array.key)?;

    debug!(manifest = %dest_path.display(), appended, "Merged manifest array");
    if appended > 0 {
        let bytes = json::to_pretty_bytes(&dest_doc, &dest_path)?;
        actions.rewrite(&dest_path, &bytes)?;
    }
    Ok(appended)
}

fn items<'a>(doc: &'a Value, location: ArrayLocation, path: &Path) -> Result<&'a Vec<Value>, CleanerError> {
    match location {
        ArrayLocation::Document => doc
            .as_array()
            .ok_or_else(|| CleanerError::malformed(path, "expected a top-level JSON array")),
        ArrayLocation::Field(key) => json::array_field(doc, key, path),
    }
}

fn items_mut<'a>(
    doc: &'a mut Value,
    location: ArrayLocation,
    path: &Path,
) -> Result<&'a mut Vec<Value>, CleanerError> {
    match location {
        ArrayLocation::Document => json::as_array_mut(doc, path),
        ArrayLocation::Field(key) => json::array_field_mut(doc, key, path),
    }
}
