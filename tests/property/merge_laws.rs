//! Property-based tests for identity-keyed merging

use guides_cleaner::commands::run_merge;
use guides_cleaner::config::LayoutConfig;
use guides_cleaner::merge::MergeOptions;
use guides_cleaner::project::Project;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn runner() -> TestRunner {
    TestRunner::new(Config {
        cases: 48,
        ..Config::default()
    })
}

fn order() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 0..8)
}

fn v3_project(root: &Path, order: &[String]) -> Project {
    let content = root.join(".guides").join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(
        content.join("index.json"),
        serde_json::to_vec(&json!({ "order": order })).unwrap(),
    )
    .unwrap();
    Project::locate(&root.join(".guides"), &LayoutConfig::default())
}

fn read_order(project: &Project) -> Vec<Value> {
    let doc: Value =
        serde_json::from_slice(&fs::read(project.content_index()).unwrap()).unwrap();
    doc["order"].as_array().unwrap().clone()
}

/// dest keeps its elements in place; each missing src identity is appended
/// once, in src order
#[test]
fn test_order_union_appends_missing_in_source_order() {
    runner()
        .run(&(order(), order()), |(dest_order, src_order)| {
            let temp = TempDir::new().unwrap();
            let dest = v3_project(&temp.path().join("dest"), &dest_order);
            let src = v3_project(&temp.path().join("src"), &src_order);

            run_merge(&dest, &src, &MergeOptions::default(), false).unwrap();

            let mut expected = dest_order.clone();
            for item in &src_order {
                if !expected.contains(item) {
                    expected.push(item.clone());
                }
            }
            let expected: Vec<Value> = expected.into_iter().map(Value::String).collect();
            prop_assert_eq!(read_order(&dest), expected);
            Ok(())
        })
        .unwrap();
}

/// Merging the same source twice changes nothing the second time
#[test]
fn test_merge_is_idempotent() {
    runner()
        .run(&(order(), order()), |(dest_order, src_order)| {
            let temp = TempDir::new().unwrap();
            let dest = v3_project(&temp.path().join("dest"), &dest_order);
            let src = v3_project(&temp.path().join("src"), &src_order);

            run_merge(&dest, &src, &MergeOptions::default(), false).unwrap();
            let second = run_merge(&dest, &src, &MergeOptions::default(), false).unwrap();

            prop_assert!(second.actions.is_empty());
            Ok(())
        })
        .unwrap();
}

/// Merging a project into itself never rewrites anything
#[test]
fn test_self_merge_is_a_no_op() {
    runner()
        .run(&order(), |items| {
            let temp = TempDir::new().unwrap();
            let project = v3_project(temp.path(), &items);
            let before = fs::read(project.content_index()).unwrap();

            let report = run_merge(&project, &project, &MergeOptions::default(), false).unwrap();

            prop_assert!(report.actions.is_empty());
            prop_assert_eq!(fs::read(project.content_index()).unwrap(), before);
            Ok(())
        })
        .unwrap();
}
