//! Manifest schema detection

use crate::error::CleanerError;
use crate::project::Project;
use crate::tree::Walker;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Manifest layout of a guide project.
///
/// V2 keeps flat manifests (`metadata.json`, `book.json`,
/// `assessments.json`); V3 keeps a per-directory `content/**/index.json`
/// tree and one `assessments/<taskId>.json` file per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V2,
    V3,
}

/// Serialized in its display form, e.g. `"v3"`.
impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V2 => write!(f, "v2"),
            SchemaVersion::V3 => write!(f, "v3"),
        }
    }
}

/// Classify a project. Either signal alone is enough for V3, so projects
/// halfway through a conversion are still treated as V3.
///
/// A project that keeps `metadata.json` but already holds per-task
/// `assessments/` files is therefore V3 for every command: `clean-content`
/// requires `content/index.json`, and merge unions only the `order` arrays
/// of the V3 content indexes, leaving `metadata.json` and `book.json` to the
/// directory union.
pub fn detect_version(project: &Project) -> Result<SchemaVersion, CleanerError> {
    let content_v3 = content_is_v3(project)?;
    let assessments_v3 = assessments_is_v3(project)?;
    let version = if content_v3 || assessments_v3 {
        SchemaVersion::V3
    } else {
        SchemaVersion::V2
    };
    debug!(
        guides = %project.guides().display(),
        content_v3,
        assessments_v3,
        %version,
        "Detected schema version"
    );
    Ok(version)
}

/// `content/index.json` present and `metadata.json` absent.
fn content_is_v3(project: &Project) -> Result<bool, CleanerError> {
    let has_index = exists(&project.content_index())?;
    let has_metadata = exists(&project.metadata_file())?;
    Ok(has_index && !has_metadata)
}

/// `assessments.json` absent and `assessments/` holding at least one file.
fn assessments_is_v3(project: &Project) -> Result<bool, CleanerError> {
    if exists(&project.assessments_file())? {
        return Ok(false);
    }
    let dir = project.assessments_dir();
    if !dir.is_dir() {
        return Ok(false);
    }
    for entry in Walker::new(dir).entries() {
        if !entry?.is_dir() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn exists(path: &Path) -> Result<bool, CleanerError> {
    path.try_exists().map_err(|e| CleanerError::io(path, e))
}
