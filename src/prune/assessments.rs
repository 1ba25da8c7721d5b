//! Assessment pruning.
//!
//! Pruning is planned first and applied second, so a run can scan the guide
//! tree as it will look once the plan is applied.

use crate::actions::Actions;
use crate::error::CleanerError;
use crate::manifest::json;
use crate::manifest::IdentityKey;
use crate::project::{Project, SchemaVersion};
use crate::reachability::{AssessmentIds, ScanOverlay};
use crate::tree::path::{file_name, task_key};
use crate::tree::Walker;
use std::path::PathBuf;
use tracing::{debug, info};

const TASK_ID: IdentityKey = IdentityKey::Field("taskId");

/// Assessment removals decided before anything is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentPlan {
    /// Task ids whose definition goes away
    pub removed: Vec<String>,
    /// V3 definition files to delete
    pub deleted_files: Vec<PathBuf>,
    /// V2 `assessments.json` and its replacement bytes
    pub rewrite: Option<(PathBuf, Vec<u8>)>,
}

impl AssessmentPlan {
    /// Record in `overlay` how the guide tree reads once this plan is applied.
    pub fn overlay(&self, overlay: &mut ScanOverlay) {
        for path in &self.deleted_files {
            overlay.exclude(path.clone());
        }
        if let Some((path, contents)) = &self.rewrite {
            overlay.replace(path.clone(), contents.clone());
        }
    }

    /// Apply the plan; returns the removed task ids.
    pub fn apply(self, actions: &mut Actions) -> Result<Vec<String>, CleanerError> {
        for path in &self.deleted_files {
            actions.remove_file(path)?;
        }
        if let Some((path, contents)) = &self.rewrite {
            actions.rewrite(path, contents)?;
        }
        info!(removed = self.removed.len(), "Assessment pruning complete");
        Ok(self.removed)
    }
}

/// Drop assessments no document tags, with the rule for `version`.
/// Returns the removed task ids.
pub fn prune_assessments(
    project: &Project,
    version: SchemaVersion,
    live: &AssessmentIds,
    actions: &mut Actions,
) -> Result<Vec<String>, CleanerError> {
    plan_assessments(project, version, live)?.apply(actions)
}

pub fn plan_assessments(
    project: &Project,
    version: SchemaVersion,
    live: &AssessmentIds,
) -> Result<AssessmentPlan, CleanerError> {
    match version {
        SchemaVersion::V2 => plan_assessments_v2(project, live),
        SchemaVersion::V3 => plan_assessments_v3(project, live),
    }
}

/// V2: rewrite `assessments.json` keeping, in order, the entries whose
/// `taskId` is live. The file is always replaced as a whole.
pub fn plan_assessments_v2(
    project: &Project,
    live: &AssessmentIds,
) -> Result<AssessmentPlan, CleanerError> {
    let path = project.assessments_file();
    let mut document = json::read_value(&path)?;
    let entries = json::as_array_mut(&mut document, &path)?;

    let mut kept = Vec::with_capacity(entries.len());
    let mut removed = Vec::new();
    for entry in entries.drain(..) {
        let task_id = TASK_ID
            .identity(&entry, &path)?
            .ok_or_else(|| CleanerError::malformed(&path, "assessment without a `taskId`"))?
            .to_string();
        if live.contains(&task_id) {
            kept.push(entry);
        } else {
            debug!(task_id = %task_id, "Dropping untagged assessment");
            removed.push(task_id);
        }
    }

    let bytes = json::to_pretty_bytes(&kept, &path)?;
    Ok(AssessmentPlan {
        removed,
        deleted_files: Vec::new(),
        rewrite: Some((path, bytes)),
    })
}

/// V3: delete each `assessments/<taskId>.json` whose task id is not live.
/// A project without an assessments directory has nothing to prune.
pub fn plan_assessments_v3(
    project: &Project,
    live: &AssessmentIds,
) -> Result<AssessmentPlan, CleanerError> {
    let dir = project.assessments_dir();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "No assessments directory");
        return Ok(AssessmentPlan::default());
    }

    let mut plan = AssessmentPlan::default();
    for path in Walker::new(&dir).files()? {
        let name = file_name(&path);
        let task_id = task_key(&name);
        if live.contains(task_id) {
            continue;
        }
        debug!(task_id = %task_id, "Dropping untagged assessment");
        plan.removed.push(task_id.to_string());
        plan.deleted_files.push(path);
    }
    Ok(plan)
}
