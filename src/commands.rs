//! Command service: one entry point per cleaner command.
//!
//! Owns the ordering between the pruners, the reachability engine and the
//! merger. The CLI parses, calls one function per command and formats the
//! returned report.

use crate::actions::{Action, Actions};
use crate::error::CleanerError;
use crate::merge::{merge_projects, MergeOptions, MergeReport};
use crate::project::{detect_version, Project, SchemaVersion};
use crate::prune::{plan_assessments, prune_content, AssessmentPlan};
use crate::reachability::{ReferenceIndex, ScanOverlay};
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use tracing::{debug, info};

/// Cleaning commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanCommand {
    /// Content pages not listed by the manifests
    Content,
    /// Assessments no document tags
    Assessments,
    /// Files under the image directory no document references
    Images,
    /// Files under the code directory no document references
    Code,
    /// All of the above
    Full,
}

impl CleanCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CleanCommand::Content => "clean-content",
            CleanCommand::Assessments => "clean-assessments",
            CleanCommand::Images => "clean-images",
            CleanCommand::Code => "clean-code",
            CleanCommand::Full => "clean-full",
        }
    }

    fn prunes_content(&self) -> bool {
        matches!(self, CleanCommand::Content | CleanCommand::Full)
    }

    fn prunes_assessments(&self) -> bool {
        matches!(self, CleanCommand::Assessments | CleanCommand::Full)
    }

    fn sweeps_assets(&self) -> bool {
        matches!(self, CleanCommand::Images | CleanCommand::Code | CleanCommand::Full)
    }

    /// Asset directories whose files are candidates for deletion.
    fn asset_roots(&self, project: &Project) -> Vec<PathBuf> {
        match self {
            CleanCommand::Images => vec![project.img_dir()],
            CleanCommand::Code => vec![project.code_dir()],
            CleanCommand::Full => vec![project.img_dir(), project.code_dir()],
            CleanCommand::Content | CleanCommand::Assessments => Vec::new(),
        }
    }
}

/// Serialized as the command-line name, e.g. `"clean-images"`.
impl Serialize for CleanCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Result of one clean run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub command: CleanCommand,
    pub version: SchemaVersion,
    pub dry_run: bool,
    pub content_deleted: Vec<PathBuf>,
    pub assessments_removed: Vec<String>,
    pub assets_deleted: Vec<PathBuf>,
    pub documents_scanned: usize,
    pub actions: Vec<Action>,
}

/// Run one clean command against `project`.
///
/// Content pruning (if any) runs first. Assessment pruning is then planned
/// and the asset scan reads the guide tree as it will look after both, so
/// removed pages and removed assessment definitions cannot keep assets
/// alive. Deletions happen only after the scan.
pub fn run_clean(
    project: &Project,
    command: CleanCommand,
    dry_run: bool,
) -> Result<CleanReport, CleanerError> {
    let version = detect_version(project)?;
    info!(command = command.name(), %version, dry_run, "Running clean");

    let mut actions = Actions::new(dry_run);
    let mut report = CleanReport {
        command,
        version,
        dry_run,
        content_deleted: Vec::new(),
        assessments_removed: Vec::new(),
        assets_deleted: Vec::new(),
        documents_scanned: 0,
        actions: Vec::new(),
    };

    if command.prunes_content() {
        report.content_deleted = prune_content(project, version, &mut actions)?;
    }
    let mut overlay: ScanOverlay = report.content_deleted.iter().cloned().collect();

    let mut plan = None;
    if command.prunes_assessments() {
        let settled = settle_assessments(project, version, &overlay)?;
        settled.plan.overlay(&mut overlay);
        report.documents_scanned = settled.documents;
        plan = Some(settled.plan);
    }

    let mut marked = None;
    if command.sweeps_assets() {
        let scan = ReferenceIndex::build(&command.asset_roots(project))?
            .scan_with(project.guides(), &overlay)?;
        report.documents_scanned = scan.documents;
        marked = Some(scan.index);
    }

    if let Some(plan) = plan {
        report.assessments_removed = plan.apply(&mut actions)?;
    }
    if let Some(index) = marked {
        if !index.records().is_empty() {
            report.assets_deleted = index.sweep(&mut actions)?;
        }
    }

    report.actions = actions.into_applied();
    Ok(report)
}

/// An assessment plan whose tag set no longer changes.
struct SettledAssessments {
    plan: AssessmentPlan,
    documents: usize,
}

/// Plan assessment pruning against the documents left after `base`.
///
/// Definitions the plan removes stop being documents. When one of them held
/// the only tag for another task, that task is dropped as well, until a scan
/// through the plan finds no fewer tags than the plan was made from.
fn settle_assessments(
    project: &Project,
    version: SchemaVersion,
    base: &ScanOverlay,
) -> Result<SettledAssessments, CleanerError> {
    let mut live = ReferenceIndex::build(&[])?
        .scan_with(project.guides(), base)?
        .assessments;
    loop {
        let plan = plan_assessments(project, version, &live)?;
        let mut overlay = base.clone();
        plan.overlay(&mut overlay);
        let scan = ReferenceIndex::build(&[])?.scan_with(project.guides(), &overlay)?;
        let next = scan.assessments.intersection(&live);
        if next == live {
            return Ok(SettledAssessments {
                plan,
                documents: scan.documents,
            });
        }
        debug!(
            before = live.len(),
            after = next.len(),
            "Removed definitions carried the only tags for other tasks"
        );
        live = next;
    }
}

/// Result of one merge run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeRunReport {
    pub dry_run: bool,
    #[serde(flatten)]
    pub merge: MergeReport,
    pub actions: Vec<Action>,
}

/// Merge `src` into `dest`.
pub fn run_merge(
    dest: &Project,
    src: &Project,
    options: &MergeOptions,
    dry_run: bool,
) -> Result<MergeRunReport, CleanerError> {
    info!(
        dest = %dest.root().display(),
        src = %src.root().display(),
        dry_run,
        "Running merge"
    );
    let mut actions = Actions::new(dry_run);
    let merge = merge_projects(dest, src, options, &mut actions)?;
    Ok(MergeRunReport {
        dry_run,
        merge,
        actions: actions.into_applied(),
    })
}
