//! Filesystem walker for traversing guide and asset trees

use crate::error::CleanerError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file
    File { path: PathBuf },
    /// A directory below the walk root
    Directory { path: PathBuf },
    /// A symbolic link that was not followed; its target may be missing
    Symlink { path: PathBuf },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path } | Entry::Directory { path } | Entry::Symlink { path } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Path components to skip entirely (e.g. ".git")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Depth-first filesystem walker. Siblings are visited in file name order so
/// runs over the same tree always see entries in the same sequence.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield every entry below the root, excluding the root itself.
    ///
    /// The first I/O failure is yielded as an `Err`; collecting into a
    /// `Result` or iterating with `?` stops the walk there.
    pub fn entries(&self) -> impl Iterator<Item = Result<Entry, CleanerError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .min_depth(1)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.should_ignore(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    let path = entry.into_path();
                    if file_type.is_dir() {
                        Some(Ok(Entry::Directory { path }))
                    } else if file_type.is_symlink() {
                        Some(Ok(Entry::Symlink { path }))
                    } else if file_type.is_file() {
                        Some(Ok(Entry::File { path }))
                    } else {
                        // Sockets, fifos and devices
                        None
                    }
                }
                Err(e) => Some(Err(CleanerError::from(e))),
            })
    }

    /// Walk the filesystem and collect all entries in visit order.
    pub fn walk(&self) -> Result<Vec<Entry>, CleanerError> {
        self.entries().collect()
    }

    /// Collect every non-directory entry (regular files and unfollowed
    /// symlinks), in visit order.
    pub fn files(&self) -> Result<Vec<PathBuf>, CleanerError> {
        let mut files = Vec::new();
        for entry in self.entries() {
            match entry? {
                Entry::File { path } | Entry::Symlink { path } => files.push(path),
                Entry::Directory { .. } => {}
            }
        }
        Ok(files)
    }

    /// Check if an entry should be skipped based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}
