//! Content page pruning.

use crate::actions::Actions;
use crate::error::CleanerError;
use crate::manifest::{ContentIndex, Metadata};
use crate::project::{Project, SchemaVersion};
use crate::tree::path::{file_name, item_key};
use crate::tree::{Entry, Walker, WalkerConfig};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key every V3 directory allows in addition to its `order`.
const INDEX_KEY: &str = "index";

/// Prune the content directory with the rule for `version`.
pub fn prune_content(
    project: &Project,
    version: SchemaVersion,
    actions: &mut Actions,
) -> Result<Vec<PathBuf>, CleanerError> {
    match version {
        SchemaVersion::V2 => prune_content_v2(project, actions),
        SchemaVersion::V3 => prune_content_v3(project, actions),
    }
}

/// V2: delete every file under `content/` whose file name is not the file
/// name of some section's `content-file`.
///
/// Only file names are compared; two pages with the same name in different
/// folders are indistinguishable to this rule.
pub fn prune_content_v2(project: &Project, actions: &mut Actions) -> Result<Vec<PathBuf>, CleanerError> {
    let metadata = Metadata::load(&project.metadata_file())?;
    let keep: HashSet<String> = metadata
        .sections
        .iter()
        .filter_map(|section| section.content_file.as_deref())
        .map(|content_file| file_name(Path::new(content_file)))
        .filter(|name| !name.is_empty())
        .collect();
    debug!(sections = metadata.sections.len(), pages = keep.len(), "Loaded section pages");

    let mut deleted = Vec::new();
    for path in Walker::new(project.content_dir()).files()? {
        if keep.contains(&file_name(&path)) {
            continue;
        }
        actions.remove_file(&path)?;
        deleted.push(path);
    }
    info!(deleted = deleted.len(), "Content pruning complete");
    Ok(deleted)
}

/// V3: each content directory keeps the entries its own `index.json` lists
/// in `order` (plus `index` itself); everything else is deleted, whole
/// directories included. Kept directories are pruned the same way with
/// their own index.
pub fn prune_content_v3(project: &Project, actions: &mut Actions) -> Result<Vec<PathBuf>, CleanerError> {
    let mut deleted = Vec::new();
    prune_topic_dir(&project.content_dir(), actions, &mut deleted)?;
    info!(deleted = deleted.len(), "Content pruning complete");
    Ok(deleted)
}

fn prune_topic_dir(
    dir: &Path,
    actions: &mut Actions,
    deleted: &mut Vec<PathBuf>,
) -> Result<(), CleanerError> {
    let index = ContentIndex::load(&dir.join(Project::index_file_name()))?;
    let mut allowed: HashSet<&str> = index.order.iter().map(String::as_str).collect();
    allowed.insert(INDEX_KEY);

    let listing = WalkerConfig {
        max_depth: Some(1),
        ..WalkerConfig::default()
    };
    for entry in Walker::with_config(dir, listing).walk()? {
        let name = file_name(entry.path());
        if allowed.contains(item_key(&name)) {
            if let Entry::Directory { path } = &entry {
                prune_topic_dir(path, actions, deleted)?;
            }
            continue;
        }
        match entry {
            Entry::Directory { path } => {
                actions.remove_dir(&path)?;
                deleted.push(path);
            }
            Entry::File { path } | Entry::Symlink { path } => {
                actions.remove_file(&path)?;
                deleted.push(path);
            }
        }
    }
    Ok(())
}
