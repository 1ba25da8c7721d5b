//! Filesystem mutations.
//!
//! Every deletion, rewrite and copy the cleaner performs goes through
//! [`Actions`], which records it for the command report. In dry-run mode the
//! record is kept and the filesystem is left alone.

use crate::error::CleanerError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One applied (or, in dry-run mode, planned) mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Deleted { path: PathBuf },
    DeletedDir { path: PathBuf },
    Rewritten { path: PathBuf },
    Copied { from: PathBuf, to: PathBuf },
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Deleted { .. } => "deleted",
            Action::DeletedDir { .. } => "deleted dir",
            Action::Rewritten { .. } => "rewritten",
            Action::Copied { .. } => "copied",
        }
    }

    /// The path the action changed.
    pub fn target(&self) -> &Path {
        match self {
            Action::Deleted { path } | Action::DeletedDir { path } | Action::Rewritten { path } => {
                path
            }
            Action::Copied { to, .. } => to,
        }
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Action::Deleted { .. } | Action::DeletedDir { .. })
    }
}

/// Mutation recorder owned by one command run.
#[derive(Debug, Default)]
pub struct Actions {
    dry_run: bool,
    applied: Vec<Action>,
}

impl Actions {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            applied: Vec::new(),
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn applied(&self) -> &[Action] {
        &self.applied
    }

    pub fn into_applied(self) -> Vec<Action> {
        self.applied
    }

    pub fn remove_file(&mut self, path: &Path) -> Result<(), CleanerError> {
        info!(path = %path.display(), dry_run = self.dry_run, "Deleting file");
        if !self.dry_run {
            fs::remove_file(path).map_err(|e| CleanerError::io(path, e))?;
        }
        self.applied.push(Action::Deleted {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Remove a directory and everything below it.
    pub fn remove_dir(&mut self, path: &Path) -> Result<(), CleanerError> {
        info!(path = %path.display(), dry_run = self.dry_run, "Deleting directory");
        if !self.dry_run {
            fs::remove_dir_all(path).map_err(|e| CleanerError::io(path, e))?;
        }
        self.applied.push(Action::DeletedDir {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Replace the whole file content.
    pub fn rewrite(&mut self, path: &Path, contents: &[u8]) -> Result<(), CleanerError> {
        info!(path = %path.display(), dry_run = self.dry_run, "Rewriting manifest");
        if !self.dry_run {
            fs::write(path, contents).map_err(|e| CleanerError::io(path, e))?;
        }
        self.applied.push(Action::Rewritten {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Copy one file, creating missing parent directories.
    pub fn copy_file(&mut self, from: &Path, to: &Path) -> Result<(), CleanerError> {
        info!(from = %from.display(), to = %to.display(), dry_run = self.dry_run, "Copying file");
        if !self.dry_run {
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent).map_err(|e| CleanerError::io(parent, e))?;
            }
            fs::copy(from, to).map_err(|e| CleanerError::io(from, e))?;
        }
        self.applied.push(Action::Copied {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        Ok(())
    }
}
