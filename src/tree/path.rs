//! Path keys used for reference matching and manifest lookups

use std::path::{Component, Path, PathBuf};

/// Render `path` relative to `root` as a reference key.
///
/// Keys always use `/` separators and carry a leading `/`, so the asset
/// `<img>/sub/a.png` is referenced by any document containing `/sub/a.png`.
/// Returns `None` when `path` is not below `root`.
pub fn reference_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut key = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            key.push('/');
            key.push_str(&part.to_string_lossy());
        }
    }
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Relative path of `path` below `root`, if any.
pub fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Final component of a path as text.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Order key of a content entry: the name with one trailing `.json` or
/// `.md` removed.
pub fn item_key(name: &str) -> &str {
    name.strip_suffix(".json")
        .or_else(|| name.strip_suffix(".md"))
        .unwrap_or(name)
}

/// Task identifier of a per-task assessment file (`<taskId>.json`).
pub fn task_key(name: &str) -> &str {
    name.strip_suffix(".json").unwrap_or(name)
}
