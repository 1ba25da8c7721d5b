//! Project merging.
//!
//! Unions a merge-source project into a destination project of the same
//! schema version: files missing from the destination are copied over, and
//! manifest arrays gain the source elements whose identity the destination
//! does not have yet. Nothing already in the destination is overwritten,
//! reordered or removed.

mod arrays;
mod directory;

pub use arrays::{manifest_arrays, merge_manifest_array, ArrayLocation, ManifestArray};
pub use directory::union_directories;

use crate::actions::Actions;
use crate::error::CleanerError;
use crate::project::{detect_version, Project, SchemaVersion};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Merge settings
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Path components never copied from the source (e.g. ".git")
    pub exclude: Vec<String>,
}

/// Elements appended to one destination manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayMergeOutcome {
    pub manifest: PathBuf,
    pub appended: usize,
}

/// What a merge changed.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub version: SchemaVersion,
    pub copied: Vec<PathBuf>,
    pub arrays: Vec<ArrayMergeOutcome>,
}

/// Merge `src` into `dest`.
///
/// Both projects are classified first; differing versions fail with
/// [`CleanerError::IncompatibleVersions`] before anything is touched. Files
/// copied before a later manifest failure stay copied.
pub fn merge_projects(
    dest: &Project,
    src: &Project,
    options: &MergeOptions,
    actions: &mut Actions,
) -> Result<MergeReport, CleanerError> {
    let dest_version = detect_version(dest)?;
    let src_version = detect_version(src)?;
    if dest_version != src_version {
        return Err(CleanerError::IncompatibleVersions {
            dest: dest.root().to_path_buf(),
            dest_version,
            src: src.root().to_path_buf(),
            src_version,
        });
    }

    let mut report = MergeReport {
        version: dest_version,
        copied: Vec::new(),
        arrays: Vec::new(),
    };
    if same_location(dest, src)? {
        info!(root = %dest.root().display(), "Merge source is the destination, nothing to do");
        return Ok(report);
    }

    report.copied = union_directories(dest.root(), src.root(), &options.exclude, actions)?;

    for array in manifest_arrays(src, dest_version)? {
        let appended = merge_manifest_array(dest, src, &array, actions)?;
        report.arrays.push(ArrayMergeOutcome {
            manifest: dest.guides().join(&array.file),
            appended,
        });
    }

    info!(
        version = %report.version,
        copied = report.copied.len(),
        appended = report.arrays.iter().map(|a| a.appended).sum::<usize>(),
        "Merge complete"
    );
    Ok(report)
}

fn same_location(dest: &Project, src: &Project) -> Result<bool, CleanerError> {
    let dest_root = dunce::canonicalize(dest.root()).map_err(|e| CleanerError::io(dest.root(), e))?;
    let src_root = dunce::canonicalize(src.root()).map_err(|e| CleanerError::io(src.root(), e))?;
    Ok(dest_root == src_root)
}
