//! Mark phase: one full pass over the guide tree.

use super::assessment::{AssessmentIds, AssessmentTagMatcher};
use super::index::{FileRecord, ReferenceIndex};
use crate::error::CleanerError;
use crate::tree::{Entry, Walker};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a completed scan.
#[derive(Debug)]
pub struct ScanResult {
    pub index: MarkedIndex,
    pub assessments: AssessmentIds,
    pub documents: usize,
}

/// A reference index whose mark phase has covered the whole guide tree.
#[derive(Debug)]
pub struct MarkedIndex {
    pub(super) records: Vec<FileRecord>,
}

impl MarkedIndex {
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Records no document referenced.
    pub fn deletable(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.is_deletable())
    }

    pub fn referenced_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_deletable()).count()
    }
}

/// How documents read during one scan differ from the disk: paths to skip
/// and documents whose bytes come from memory.
///
/// Lets a run scan the guide tree as it will look after its own pending
/// deletions and rewrites, in dry-run mode too.
#[derive(Debug, Clone, Default)]
pub struct ScanOverlay {
    excluded: HashSet<PathBuf>,
    replaced: HashMap<PathBuf, Vec<u8>>,
}

impl ScanOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip `path` and everything below it.
    pub fn exclude(&mut self, path: impl Into<PathBuf>) {
        self.excluded.insert(path.into());
    }

    /// Read `contents` instead of the file at `path`.
    pub fn replace(&mut self, path: impl Into<PathBuf>, contents: Vec<u8>) {
        self.replaced.insert(path.into(), contents);
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|gone| path.starts_with(gone))
    }

    fn read(&self, path: &Path) -> Result<Cow<'_, [u8]>, CleanerError> {
        match self.replaced.get(path) {
            Some(contents) => Ok(Cow::Borrowed(contents.as_slice())),
            None => fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| CleanerError::io(path, e)),
        }
    }
}

impl FromIterator<PathBuf> for ScanOverlay {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            excluded: iter.into_iter().collect(),
            replaced: HashMap::new(),
        }
    }
}

impl ReferenceIndex {
    /// Read every file below `guide_root` (depth-first, name order), clear
    /// the mark of each candidate whose key occurs in it, and collect
    /// assessment tags from the same bytes.
    ///
    /// Any read failure aborts the scan; nothing has been deleted yet at
    /// that point.
    pub fn scan(self, guide_root: &Path) -> Result<ScanResult, CleanerError> {
        self.scan_with(guide_root, &ScanOverlay::default())
    }

    /// Like [`scan`](Self::scan), but documents are read through `overlay`:
    /// excluded paths are not read and replaced documents are read from
    /// memory. Symlinks count as documents only when they resolve to a file.
    pub fn scan_with(
        mut self,
        guide_root: &Path,
        overlay: &ScanOverlay,
    ) -> Result<ScanResult, CleanerError> {
        let tags = AssessmentTagMatcher::new()?;
        let mut assessments = AssessmentIds::new();
        let mut documents = 0;

        for entry in Walker::new(guide_root).entries() {
            let path = match entry? {
                Entry::File { path } => path,
                Entry::Symlink { path } if path.is_file() => path,
                Entry::Symlink { path } => {
                    debug!(link = %path.display(), "Link does not resolve to a file, not scanning it");
                    continue;
                }
                Entry::Directory { .. } => continue,
            };
            if overlay.is_excluded(&path) {
                continue;
            }
            let text = overlay.read(&path)?;
            documents += 1;

            let matched = self.matched_patterns(&text);
            for &pattern in &matched {
                self.mark_pattern(pattern);
            }
            let tagged = tags.collect(&text, &mut assessments);
            if !matched.is_empty() || tagged > 0 {
                debug!(
                    document = %path.display(),
                    references = matched.len(),
                    assessment_tags = tagged,
                    "Scanned document"
                );
            }
        }

        let marked = MarkedIndex {
            records: self.records,
        };
        info!(
            documents,
            candidates = marked.records.len(),
            referenced = marked.referenced_count(),
            assessments = assessments.len(),
            "Reference scan complete"
        );

        Ok(ScanResult {
            index: marked,
            assessments,
            documents,
        })
    }
}
