//! Integration tests for CLI parsing and routing

use clap::Parser;
use guides_cleaner::cli::{command_name, map_error, Cli, Commands, OutputFormat, RunContext};
use guides_cleaner::config::CleanerConfig;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::{snapshot, v2_project, v3_project, write_file};

fn context(base: &std::path::Path, cli: &Cli) -> RunContext {
    RunContext::from_config(CleanerConfig::default(), base.to_path_buf())
        .with_dry_run(cli.dry_run)
        .with_format(cli.format)
}

#[test]
fn test_parse_clean_commands_with_global_flags() {
    let cli = Cli::try_parse_from([
        "guides-cleaner",
        "clean-images",
        "--dry-run",
        "--format",
        "json",
        "project/.guides",
    ])
    .unwrap();

    assert!(cli.dry_run);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(command_name(&cli.command), "clean-images");
    match cli.command {
        Commands::CleanImages { path } => {
            assert_eq!(path, Some(PathBuf::from("project/.guides")))
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_merge_requires_two_paths() {
    assert!(Cli::try_parse_from(["guides-cleaner", "merge", "dest"]).is_err());
    let cli = Cli::try_parse_from(["guides-cleaner", "merge", "dest", "src"]).unwrap();
    assert_eq!(command_name(&cli.command), "merge");
}

#[test]
fn test_quiet_and_verbose_conflict() {
    assert!(Cli::try_parse_from(["guides-cleaner", "-q", "-v", "clean-full"]).is_err());
}

#[test]
fn test_default_path_is_guides_dir_under_base() {
    let temp = TempDir::new().unwrap();
    let project = v2_project(temp.path());
    let cli = Cli::try_parse_from(["guides-cleaner", "clean-images"]).unwrap();

    let output = context(temp.path(), &cli).execute(&cli.command).unwrap();

    assert!(output.contains("clean-images"));
    assert!(output.contains("unused.jpg"));
    assert!(!project.img_dir().join("unused.jpg").exists());
}

#[test]
fn test_assignment_root_is_accepted() {
    let temp = TempDir::new().unwrap();
    let project = v3_project(temp.path());
    let root = temp.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["guides-cleaner", "clean-code", root.as_str()]).unwrap();

    context(temp.path(), &cli).execute(&cli.command).unwrap();

    assert!(!project.code_dir().join("unused.py").exists());
    assert!(project.code_dir().join("loops.py").exists());
}

#[test]
fn test_json_output_for_dry_run_clean() {
    let temp = TempDir::new().unwrap();
    v2_project(temp.path());
    let before = snapshot(temp.path());
    let cli =
        Cli::try_parse_from(["guides-cleaner", "--dry-run", "--format", "json", "clean-full"])
            .unwrap();

    let output = context(temp.path(), &cli).execute(&cli.command).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["command"], "clean-full");
    assert_eq!(value["version"], "v2");
    assert_eq!(value["dry_run"], true);
    assert_eq!(value["assessments_removed"], serde_json::json!(["t2"]));
    assert_eq!(snapshot(temp.path()), before);
}

#[test]
fn test_merge_incompatibility_maps_to_clear_message() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let src = temp.path().join("src");
    v2_project(&dest);
    v3_project(&src);
    let cli = Cli::try_parse_from([
        "guides-cleaner",
        "merge",
        dest.to_str().unwrap(),
        src.to_str().unwrap(),
    ])
    .unwrap();

    let err = context(temp.path(), &cli).execute(&cli.command).unwrap_err();

    let message = map_error(&err);
    assert!(message.starts_with("merge refused"));
    assert!(message.contains("v2"));
    assert!(message.contains("v3"));
}

#[test]
fn test_custom_layout_names_are_honored() {
    let temp = TempDir::new().unwrap();
    let guides = temp.path().join(".guides");
    write_file(&guides.join("metadata.json"), r#"{"sections": []}"#);
    write_file(&guides.join("assessments.json"), "[]");
    write_file(&guides.join("pictures").join("keep.png"), "");
    write_file(&guides.join("pictures").join("drop.png"), "");
    write_file(&guides.join("page.md"), "![](pictures/keep.png)");

    let mut config = CleanerConfig::default();
    config.layout.img_dir = "pictures".to_string();
    let cli = Cli::try_parse_from(["guides-cleaner", "clean-images"]).unwrap();
    RunContext::from_config(config, temp.path().to_path_buf())
        .execute(&cli.command)
        .unwrap();

    assert!(guides.join("pictures").join("keep.png").exists());
    assert!(!guides.join("pictures").join("drop.png").exists());
}
