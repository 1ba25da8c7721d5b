//! Directory union: copy what the destination lacks.

use crate::actions::Actions;
use crate::error::CleanerError;
use crate::tree::path::relative_to;
use crate::tree::{Walker, WalkerConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy every file under `src_root` whose relative path does not exist
/// under `dest_root`. Existing destination paths are never overwritten.
/// Symlinks are copied as the file they point to; dangling ones are skipped.
/// Returns the destination paths created.
pub fn union_directories(
    dest_root: &Path,
    src_root: &Path,
    exclude: &[String],
    actions: &mut Actions,
) -> Result<Vec<PathBuf>, CleanerError> {
    let config = WalkerConfig {
        ignore_patterns: exclude.to_vec(),
        ..WalkerConfig::default()
    };

    let mut copied = Vec::new();
    for path in Walker::with_config(src_root, config).files()? {
        let Some(relative) = relative_to(src_root, &path) else {
            continue;
        };
        if !path.is_file() {
            debug!(path = %relative.display(), "Link does not resolve to a file, not copying it");
            continue;
        }
        let target = dest_root.join(&relative);
        let present = target
            .try_exists()
            .map_err(|e| CleanerError::io(&target, e))?;
        if present {
            debug!(path = %relative.display(), "Destination already has path, keeping it");
            continue;
        }
        actions.copy_file(&path, &target)?;
        copied.push(target);
    }
    Ok(copied)
}
