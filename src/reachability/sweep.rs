//! Sweep phase.

use super::scan::MarkedIndex;
use crate::actions::Actions;
use crate::error::CleanerError;
use std::path::PathBuf;

impl MarkedIndex {
    /// Delete every record still marked deletable, fail-fast. Files removed
    /// before a failure stay removed.
    pub fn sweep(self, actions: &mut Actions) -> Result<Vec<PathBuf>, CleanerError> {
        let mut deleted = Vec::new();
        for record in self.records.into_iter().filter(|r| r.is_deletable()) {
            actions.remove_file(&record.absolute_path)?;
            deleted.push(record.absolute_path);
        }
        Ok(deleted)
    }
}
