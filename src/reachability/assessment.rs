//! Assessment tag collection: `{<label>|assessment}(<taskId>)`.

use crate::error::CleanerError;
use regex::bytes::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

const ASSESSMENT_TAG: &str = r"\{[^{}]*\|assessment\}\(([A-Za-z0-9-]+)\)";

/// Task ids referenced by at least one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentIds(BTreeSet<String>);

impl AssessmentIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent insert.
    pub fn insert(&mut self, task_id: impl Into<String>) {
        self.0.insert(task_id.into());
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.0.contains(task_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Ids present in both sets.
    pub fn intersection(&self, other: &AssessmentIds) -> AssessmentIds {
        Self(self.0.intersection(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for AssessmentIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Finds assessment tags in raw document bytes.
#[derive(Debug, Clone)]
pub struct AssessmentTagMatcher {
    pattern: Regex,
}

impl AssessmentTagMatcher {
    pub fn new() -> Result<Self, CleanerError> {
        let pattern = Regex::new(ASSESSMENT_TAG).map_err(|e| CleanerError::Pattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Insert every task id tagged in `text` into `ids`.
    pub fn collect(&self, text: &[u8], ids: &mut AssessmentIds) -> usize {
        let mut found = 0;
        for captures in self.pattern.captures_iter(text) {
            if let Some(task_id) = captures.get(1) {
                // The id class is ASCII-only
                ids.insert(String::from_utf8_lossy(task_id.as_bytes()).into_owned());
                found += 1;
            }
        }
        found
    }
}
