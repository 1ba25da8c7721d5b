//! Clean command formatters.

use super::shared::{actions_table, dry_run_banner, heading, to_json};
use crate::commands::CleanReport;
use crate::error::CleanerError;
use std::path::Path;

pub fn format_clean_text(report: &CleanReport, base: &Path) -> String {
    let mut lines = Vec::new();
    if let Some(banner) = dry_run_banner(report.dry_run) {
        lines.push(banner);
    }
    lines.push(heading(&format!(
        "{} ({} project)",
        report.command.name(),
        report.version
    )));
    lines.push(format!("  Documents scanned:   {}", report.documents_scanned));
    lines.push(format!("  Content deleted:     {}", report.content_deleted.len()));
    lines.push(format!("  Assessments removed: {}", report.assessments_removed.len()));
    lines.push(format!("  Assets deleted:      {}", report.assets_deleted.len()));
    if !report.assessments_removed.is_empty() {
        lines.push(format!(
            "  Removed task ids:    {}",
            report.assessments_removed.join(", ")
        ));
    }
    lines.push(String::new());
    lines.push(actions_table(&report.actions, base));
    lines.join("\n")
}

pub fn format_clean_json(report: &CleanReport) -> Result<String, CleanerError> {
    to_json(report)
}
