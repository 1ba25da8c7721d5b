//! Shared presentation helpers: headings, action tables, json rendering.

use crate::actions::Action;
use crate::error::CleanerError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

pub(super) fn heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Prefix for a report whose actions were only planned.
pub(super) fn dry_run_banner(dry_run: bool) -> Option<String> {
    dry_run.then(|| format!("{}", "Dry run: nothing was changed.".yellow()))
}

/// Table of applied actions, paths shown relative to `base` when possible.
pub(super) fn actions_table(actions: &[Action], base: &Path) -> String {
    if actions.is_empty() {
        return "Nothing to do.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Action", "Path"]);
    for action in actions {
        let target = action.target();
        let shown = target.strip_prefix(base).unwrap_or(target);
        table.add_row(vec![action.label().to_string(), shown.display().to_string()]);
    }
    table.to_string()
}

pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, CleanerError> {
    serde_json::to_string_pretty(value).map_err(|e| CleanerError::Output(e.to_string()))
}
