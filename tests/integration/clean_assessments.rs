//! Integration tests for assessment pruning

use guides_cleaner::commands::{run_clean, CleanCommand};
use guides_cleaner::error::CleanerError;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use crate::integration::{file_list, read_json, snapshot, v2_project, v3_project, write_file};

#[test]
fn test_v2_keeps_tagged_assessments_in_order() {
    let temp = TempDir::new().unwrap();
    let project = v2_project(temp.path());
    write_file(
        &project.assessments_file(),
        r#"[{"taskId": "t3"}, {"taskId": "t1", "type": "test"}, {"taskId": "t2"}]"#,
    );
    write_file(
        &project.content_dir().join("loops.md"),
        "{Quiz|assessment}(t3)",
    );

    let report = run_clean(&project, CleanCommand::Assessments, false).unwrap();

    // draft.md still tags t2: content is not pruned by this command
    assert!(report.assessments_removed.is_empty());
    assert_eq!(
        read_json(&project.assessments_file()),
        json!([{"taskId": "t3"}, {"taskId": "t1", "type": "test"}, {"taskId": "t2"}])
    );
}

#[test]
fn test_v2_drops_untagged_and_pretty_prints() {
    let temp = TempDir::new().unwrap();
    let project = v2_project(temp.path());
    fs::remove_file(project.content_dir().join("draft.md")).unwrap();

    let report = run_clean(&project, CleanCommand::Assessments, false).unwrap();

    assert_eq!(report.assessments_removed, vec!["t2".to_string()]);
    let text = fs::read_to_string(project.assessments_file()).unwrap();
    assert_eq!(
        text,
        "[\n {\n  \"taskId\": \"t1\",\n  \"type\": \"test\"\n }\n]"
    );
}

#[test]
fn test_v2_no_tags_leaves_empty_array() {
    let temp = TempDir::new().unwrap();
    let project = v2_project(temp.path());
    write_file(&project.content_dir().join("intro.md"), "no tags");
    write_file(&project.content_dir().join("draft.md"), "none here");

    run_clean(&project, CleanCommand::Assessments, false).unwrap();

    assert_eq!(fs::read_to_string(project.assessments_file()).unwrap(), "[]");
}

#[test]
fn test_v2_entry_without_task_id_is_malformed() {
    let temp = TempDir::new().unwrap();
    let project = v2_project(temp.path());
    write_file(&project.assessments_file(), r#"[{"taskId": "t1"}, {"type": "test"}]"#);
    let before = snapshot(temp.path());

    let err = run_clean(&project, CleanCommand::Assessments, false).unwrap_err();

    assert!(matches!(err, CleanerError::MalformedManifest { .. }));
    assert_eq!(snapshot(temp.path()), before);
}

#[test]
fn test_v2_missing_manifest_is_fatal() {
    let temp = TempDir::new().unwrap();
    let project = v2_project(temp.path());
    fs::remove_file(project.assessments_file()).unwrap();

    let err = run_clean(&project, CleanCommand::Assessments, false).unwrap_err();

    assert!(err.to_string().contains("assessments.json"));
}

#[test]
fn test_v3_deletes_untagged_task_files() {
    let temp = TempDir::new().unwrap();
    let project = v3_project(temp.path());
    fs::remove_file(project.content_dir().join("basics").join("stale.md")).unwrap();

    let report = run_clean(&project, CleanCommand::Assessments, false).unwrap();

    assert_eq!(report.assessments_removed, vec!["t2".to_string()]);
    assert_eq!(file_list(&project.assessments_dir()), vec!["t1.json"]);
}

#[test]
fn test_v3_tag_anywhere_in_guides_keeps_assessment() {
    let temp = TempDir::new().unwrap();
    let project = v3_project(temp.path());

    let report = run_clean(&project, CleanCommand::Assessments, false).unwrap();

    // stale.md is unlisted but still present, so its tag counts
    assert!(report.assessments_removed.is_empty());
    assert_eq!(file_list(&project.assessments_dir()), vec!["t1.json", "t2.json"]);
}

#[test]
fn test_tags_need_exact_shape() {
    let temp = TempDir::new().unwrap();
    let project = v3_project(temp.path());
    write_file(
        &project.content_dir().join("basics").join("stale.md"),
        "{a|b}|assessment}(t2) {x|Assessment}(t2) {x|assessment} (t2)",
    );

    let report = run_clean(&project, CleanCommand::Assessments, false).unwrap();

    assert_eq!(report.assessments_removed, vec!["t2".to_string()]);
}
