//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::CleanerError;

/// Map a domain error to the line printed on stderr.
pub fn map_error(e: &CleanerError) -> String {
    let prefix = match e {
        CleanerError::IncompatibleVersions { .. } => "merge refused",
        CleanerError::MalformedManifest { .. } | CleanerError::Json { .. } => "manifest error",
        _ => "error",
    };
    format!("{}: {}", prefix, e)
}
