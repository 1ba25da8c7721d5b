//! Merge command formatters.

use super::shared::{actions_table, dry_run_banner, heading, to_json};
use crate::commands::MergeRunReport;
use crate::error::CleanerError;
use std::path::Path;

pub fn format_merge_text(report: &MergeRunReport, base: &Path) -> String {
    let mut lines = Vec::new();
    if let Some(banner) = dry_run_banner(report.dry_run) {
        lines.push(banner);
    }
    lines.push(heading(&format!("merge ({} projects)", report.merge.version)));
    lines.push(format!("  Files copied: {}", report.merge.copied.len()));
    for outcome in &report.merge.arrays {
        let manifest = outcome
            .manifest
            .strip_prefix(base)
            .unwrap_or(&outcome.manifest);
        lines.push(format!(
            "  {}: {} appended",
            manifest.display(),
            outcome.appended
        ));
    }
    lines.push(String::new());
    lines.push(actions_table(&report.actions, base));
    lines.join("\n")
}

pub fn format_merge_json(report: &MergeRunReport) -> Result<String, CleanerError> {
    to_json(report)
}
