//! Candidate file registry and literal reference matcher.

use crate::error::CleanerError;
use crate::tree::path::reference_key;
use crate::tree::Walker;
use regex::bytes::{RegexSet, RegexSetBuilder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const MATCHER_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// Deletion state of a candidate file. Moves from `Deletable` to
/// `Referenced` only, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mark {
    Deletable,
    Referenced,
}

/// A candidate file under one of the asset roots.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub absolute_path: PathBuf,
    /// Reference key, e.g. `/diagrams/flow.png`
    pub relative_path: String,
    mark: Mark,
}

impl FileRecord {
    fn new(absolute_path: PathBuf, relative_path: String) -> Self {
        Self {
            absolute_path,
            relative_path,
            mark: Mark::Deletable,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_deletable(&self) -> bool {
        self.mark == Mark::Deletable
    }

    pub(super) fn mark_referenced(&mut self) {
        self.mark = Mark::Referenced;
    }
}

/// Candidate files plus a matcher over their keys, before any document has
/// been scanned.
#[derive(Debug)]
pub struct ReferenceIndex {
    pub(super) records: Vec<FileRecord>,
    /// Distinct keys; pattern `i` of `matcher` is `keys[i]`
    pub(super) keys: Vec<String>,
    /// Record indices sharing `keys[i]` (same relative path in two roots)
    pub(super) holders: Vec<Vec<usize>>,
    pub(super) matcher: Option<RegexSet>,
}

impl ReferenceIndex {
    /// Register every file below each asset root, at any depth.
    ///
    /// A root that does not exist contributes nothing.
    pub fn build(asset_roots: &[PathBuf]) -> Result<Self, CleanerError> {
        let mut records = Vec::new();
        let mut by_key: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for root in asset_roots {
            if !root.is_dir() {
                debug!(root = %root.display(), "Asset root missing, nothing to index");
                continue;
            }
            for path in Walker::new(root).files()? {
                let Some(key) = reference_key(root, &path) else {
                    continue;
                };
                by_key.entry(key.clone()).or_default().push(records.len());
                records.push(FileRecord::new(path, key));
            }
        }

        let (keys, holders): (Vec<String>, Vec<Vec<usize>>) = by_key.into_iter().unzip();
        let matcher = build_matcher(&keys)?;
        debug!(
            files = records.len(),
            keys = keys.len(),
            "Reference index built"
        );

        Ok(Self {
            records,
            keys,
            holders,
            matcher,
        })
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys that occur literally in `text`, each reported once.
    pub fn matching_keys<'a>(&'a self, text: &[u8]) -> impl Iterator<Item = &'a str> + 'a {
        self.matched_patterns(text)
            .into_iter()
            .map(move |i| self.keys[i].as_str())
    }

    pub(super) fn matched_patterns(&self, text: &[u8]) -> Vec<usize> {
        match &self.matcher {
            Some(matcher) => matcher.matches(text).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Clear the mark of every record holding pattern `pattern`.
    pub(super) fn mark_pattern(&mut self, pattern: usize) {
        for &record in &self.holders[pattern] {
            self.records[record].mark_referenced();
        }
    }
}

/// One escaped literal per key. Every key is tested independently, so keys
/// nested inside each other (`/a.png` within `/old/a.png`) are all found.
fn build_matcher(keys: &[String]) -> Result<Option<RegexSet>, CleanerError> {
    if keys.is_empty() {
        return Ok(None);
    }
    RegexSetBuilder::new(keys.iter().map(|key| regex::escape(key)))
        .size_limit(MATCHER_SIZE_LIMIT)
        .dfa_size_limit(MATCHER_SIZE_LIMIT)
        .build()
        .map(Some)
        .map_err(|e| CleanerError::Pattern(e.to_string()))
}
